//! Plumbing shared by the ingest and dashboard binaries: environment
//! parsing, tracing setup, the HTTP middleware stack and shutdown handling.

pub mod env;
pub mod middleware;
pub mod shutdown;
pub mod telemetry;
