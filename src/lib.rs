//! HTTP status service for the DevSecOps pipeline demo.
//!
//! A deliberately small service: a handful of GET routes returning static or
//! near-static JSON, with configuration read once from the process
//! environment at startup. It exists to give the surrounding deployment
//! pipeline (container build, scan, provisioning, deploy) something real to
//! build, probe, and roll out.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus request counters
//! - [`utils`]: Graceful-shutdown helper

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
