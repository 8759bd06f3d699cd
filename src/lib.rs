pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServiceConfig;

pub use adapters::http::{build_router, serve, serve_on};
pub use core::{summarize, validate_summarize_request};
pub use domain::model::{AppInfo, FieldError, NumericList, Summary};
pub use utils::error::{CalcError, Result};
