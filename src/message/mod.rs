mod command;
mod message_handler;

pub use command::*;
pub use message_handler::message_handler_wrapper;
