mod bot_error;
mod config;
mod context;
mod dispatch;
mod error_handler;
mod types;
mod update_listener;

pub use bot_error::*;
pub use config::*;
pub use context::*;
pub use dispatch::dispatch_update;
pub use error_handler::{report_background_task_error, report_bot_error, report_internal_error};
pub use types::*;
pub use update_listener::UpdateListener;
