//! Service modules behind the tool-calling interface
//!
//! Each submodule implements one service family: historical geocoding,
//! emotional sentiment, probabilistic routing, simulated weather, and
//! web content fetching. All of them are pure functions over the shared
//! [`crate::catalog::Catalog`] except `fetch`, which performs real HTTP.

pub mod emotions;
pub mod fetch;
pub mod history;
pub mod navigation;
pub mod weather;
