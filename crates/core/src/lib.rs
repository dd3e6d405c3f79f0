//! Domain types and pure analysis logic for the environment monitor.
//!
//! Nothing in this crate touches the filesystem or the network. Readings
//! come in, scores, recommendations and chart specifications come out.

pub mod chart;
pub mod error;
pub mod figures;
pub mod reading;
pub mod recommendations;
pub mod regression;
pub mod scoring;
pub mod sensor;
pub mod thresholds;
pub mod types;
