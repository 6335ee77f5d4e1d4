//! `MapMind` - simulated map intelligence services
//!
//! This library provides historical geocoding, emotional sentiment
//! profiles, probabilistic route scoring, simulated weather, and web
//! content fetching over a built-in catalog, exposed through a uniform
//! tool-calling interface and an HTTP API.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ranking;
pub mod resolve;
pub mod servers;
pub mod tools;
pub mod web;

// Re-export core types for public API
pub use catalog::Catalog;
pub use config::MapMindConfig;
pub use error::MapMindError;
pub use tools::ToolRegistry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, MapMindError>;
