//! Per-category product view with remote-corroborated search.
//!
//! One [`CategoryView`] serves any category: it is configured with the
//! category, its static display list, and (per search) a [`SearchSource`].
//!
//! Searches are split into [`CategoryView::begin_search`] and
//! [`CategoryView::complete_search`] so several can be in flight at once.
//! Every search (and every restore) takes the next sequence number, and a
//! response is only applied if its number is newer than the last state
//! applied. Responses that arrive out of order are dropped.

use std::fmt::Display;

use catalogo_core::category::Category;

use crate::display::{display_catalog, DisplayRecord};
use crate::reconcile::reconcile;
use crate::source::SearchSource;

/// Sequence number attached to an outgoing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// A search that has been started and is waiting on the remote source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub ticket: SearchTicket,
    /// The trimmed query to send.
    pub query: String,
}

/// What [`CategoryView::begin_search`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStart {
    /// The query was blank; the baseline is displayed and no call is needed.
    Restored,
    /// A remote search must be issued and its outcome passed back.
    Pending(PendingSearch),
}

/// What happened to a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome replaced the displayed list.
    Applied,
    /// A newer state was already applied; the outcome was discarded.
    Stale,
}

/// Display state for one category.
#[derive(Debug, Clone)]
pub struct CategoryView {
    category: Category,
    baseline: &'static [DisplayRecord],
    displayed: Vec<DisplayRecord>,
    query: String,
    last_issued: u64,
    last_applied: u64,
}

impl CategoryView {
    /// A view over the built-in static list for `category`.
    pub fn new(category: Category) -> Self {
        Self::with_baseline(category, display_catalog(category))
    }

    /// A view over an arbitrary static list.
    pub fn with_baseline(category: Category, baseline: &'static [DisplayRecord]) -> Self {
        Self {
            category,
            baseline,
            displayed: baseline.to_vec(),
            query: String::new(),
            last_issued: 0,
            last_applied: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The unfiltered static list.
    pub fn baseline(&self) -> &'static [DisplayRecord] {
        self.baseline
    }

    /// What is currently on screen.
    pub fn displayed(&self) -> &[DisplayRecord] {
        &self.displayed
    }

    /// The most recent query text (trimmed).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Start a search for `query`.
    ///
    /// A blank query restores the baseline right away and supersedes any
    /// search still in flight.
    pub fn begin_search(&mut self, query: &str) -> SearchStart {
        let query = query.trim();
        self.query = query.to_string();
        self.last_issued += 1;

        if query.is_empty() {
            self.last_applied = self.last_issued;
            self.displayed = self.baseline.to_vec();
            tracing::debug!(category = %self.category, "Search cleared, baseline restored");
            return SearchStart::Restored;
        }

        SearchStart::Pending(PendingSearch {
            ticket: SearchTicket(self.last_issued),
            query: query.to_string(),
        })
    }

    /// Apply the outcome of a search started with [`Self::begin_search`].
    ///
    /// On success the baseline is narrowed with [`reconcile`]; on failure the
    /// display is cleared. Either way, nothing changes if a newer state has
    /// already been applied.
    pub fn complete_search<S, E>(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<S>, E>,
    ) -> Completion
    where
        S: AsRef<str>,
        E: Display,
    {
        if ticket.0 <= self.last_applied {
            tracing::debug!(
                category = %self.category,
                ticket = ticket.0,
                last_applied = self.last_applied,
                "Discarding stale search response"
            );
            return Completion::Stale;
        }
        self.last_applied = ticket.0;

        self.displayed = match outcome {
            Ok(names) => reconcile(self.baseline, &names),
            Err(e) => {
                tracing::warn!(category = %self.category, error = %e, "Search failed, clearing results");
                Vec::new()
            }
        };
        Completion::Applied
    }

    /// Run a search end to end against `source`.
    pub async fn search<Src>(&mut self, source: &Src, query: &str) -> Completion
    where
        Src: SearchSource + ?Sized,
    {
        match self.begin_search(query) {
            SearchStart::Restored => Completion::Applied,
            SearchStart::Pending(pending) => {
                let outcome = source.search_names(self.category, &pending.query).await;
                self.complete_search(pending.ticket, outcome)
            }
        }
    }
}
