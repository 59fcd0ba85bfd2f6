//! Front end for the product catalog.
//!
//! Holds the static, richly described product lists shown per category and
//! narrows them by corroborating names against the catalog service's search
//! endpoint.

pub mod api;
pub mod display;
pub mod reconcile;
pub mod source;
pub mod view;
