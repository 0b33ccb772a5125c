pub mod api;
pub mod config;
pub mod data;
pub mod format;
pub mod logging;
pub mod pagination;
pub mod widget;

pub use api::{ApiError, DateWindow, OuraClient};
pub use config::Settings;
pub use data::OuraData;
pub use widget::{Canvas, OuraWidget};
