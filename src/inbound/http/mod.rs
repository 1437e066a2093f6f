//! HTTP adapter modules.

pub mod error;
pub mod health;
pub mod state;
pub mod users;

pub use error::{ApiResult, json_config, path_config};
pub use health::HealthState;
pub use state::HttpState;
