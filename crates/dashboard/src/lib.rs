//! Environment dashboard library.
//!
//! Loads the record store, scores it, and renders the result as an HTML page
//! with plotly charts. Exposed as a library so integration tests and the
//! binary entrypoint share one router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod page;
pub mod report;
pub mod router;
pub mod routes;
pub mod state;
