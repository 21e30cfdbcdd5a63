//! Core library for the weather widget.
//!
//! This crate defines:
//! - Explicit lookup configuration (credential, provider URL)
//! - The current-weather lookup service and its error type
//! - Condition code classification into icons and jokes
//! - The country/city catalog offered to the user
//!
//! It has no UI of its own; `weather-cli` is one front end, others can reuse it.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod model;
pub mod provider;

pub use catalog::Country;
pub use classify::{IconKey, JokeCategory};
pub use config::LookupConfig;
pub use model::{ConditionCode, LookupRequest, WeatherSummary};
pub use provider::{LookupError, WeatherProvider, openweather::WeatherLookupService};
