use teloxide::utils::command::ParseError;
use thiserror::Error;

use crate::{database::DatabaseError, text::Text};

// BotError includes internal errors (like database errors) and user-facing errors (like unknown commands); InternalError only has internal errors

#[derive(Error, Debug)]
pub enum InternalError {
    #[error("teloxide error")]
    Teloxide(#[from] teloxide::RequestError),

    #[error("database error: {}", .0)]
    Database(#[from] DatabaseError),

    #[error("unexpected none")]
    UnexpectedNone { type_name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InternalError {
    pub fn is_timeout_error(&self) -> bool {
        match self {
            Self::Teloxide(teloxide::RequestError::Network(network_error)) => {
                network_error.is_timeout()
            }
            _ => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum UserError {
    #[error("command parse error")]
    CommandError(ParseError),

    #[error("user has no active sticker")]
    NoActiveSticker,

    #[error("user sent something other than a sticker or text message")]
    UnhandledMessageType,
}

impl UserError {
    pub fn end_user_error(&self) -> String {
        match self {
            Self::CommandError(_) => Text::unknown_command(),
            Self::NoActiveSticker => Text::send_sticker_first(),
            Self::UnhandledMessageType => Text::unhandled_message(),
        }
    }
}

#[derive(Error, Debug)]
pub enum BotError {
    #[error("internal error")]
    InternalError(#[from] InternalError),

    #[error("user error")]
    UserError(#[from] UserError),
}

macro_rules! impl_error {
    ($error_type:ty, $internal_name:ident) => {
        impl From<$error_type> for BotError {
            fn from(value: $error_type) -> Self {
                Self::InternalError(InternalError::$internal_name(value))
            }
        }
    };
}

impl_error!(DatabaseError, Database);
