use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalogo_client::api::CatalogApi;
use catalogo_client::view::CategoryView;
use catalogo_core::category::Category;
use catalogo_core::types::DbId;

/// Terminal front end for the product catalog.
#[derive(Parser, Debug)]
#[command(name = "catalogo", version, about)]
struct Cli {
    /// Catalog service base URL, including the `/api` prefix.
    #[arg(
        long,
        env = "CATALOGO_API_URL",
        default_value = "http://localhost:3000/api",
        global = true
    )]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a category's products, optionally narrowed by a search.
    Browse {
        /// carnes, importados or lacteos.
        category: Category,
        /// Name fragment; blank shows the full list without calling the service.
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// List the store records of a category.
    List { category: Category },
    /// Fetch one store record.
    Get { category: Category, id: DbId },
    /// Insert a store record.
    Create { category: Category, nombre: String },
    /// Rename a store record.
    Update {
        category: Category,
        id: DbId,
        nombre: String,
    },
    /// Delete a store record.
    Delete { category: Category, id: DbId },
    /// Check the service and its store.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing (stderr, so stdout stays machine-readable) ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalogo_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let api = CatalogApi::new(cli.api_url);
    tracing::debug!(api_url = api.api_url(), "Using catalog service");

    match cli.command {
        Command::Browse { category, query } => {
            let mut view = CategoryView::new(category);
            view.search(&api, &query).await;
            tracing::info!(
                category = %category,
                query = view.query(),
                shown = view.displayed().len(),
                total = view.baseline().len(),
                "{}",
                category.title()
            );
            print_json(&view.displayed())?;
        }
        Command::List { category } => {
            print_json(&api.list(category).await?)?;
        }
        Command::Get { category, id } => match api.get(category, id).await? {
            Some(item) => print_json(&item)?,
            None => bail!("{category}/{id}: No encontrado"),
        },
        Command::Create { category, nombre } => {
            let id = api.create(category, &nombre).await?;
            print_json(&serde_json::json!({ "id": id }))?;
        }
        Command::Update {
            category,
            id,
            nombre,
        } => {
            api.update(category, id, &nombre).await?;
            print_json(&serde_json::json!({ "ok": true }))?;
        }
        Command::Delete { category, id } => {
            api.delete(category, id).await?;
            print_json(&serde_json::json!({ "ok": true }))?;
        }
        Command::Health => {
            print_json(&api.health().await?)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}
