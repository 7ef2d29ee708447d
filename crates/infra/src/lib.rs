//! # CampusCal Infrastructure
//!
//! Impure edges of the calendar engine.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON/TOML files)
//! - Tracing subscriber initialisation
//!
//! ## Architecture
//! - Depends on `campuscal-domain` only
//! - Contains all "impure" code (environment, filesystem, global state)

pub mod config;
pub mod observability;

pub use config::load as load_config;
pub use observability::init_tracing;
