use std::{fmt::Display, str::FromStr};

use diesel::{sql_types::Text, QueryableByName};

/// Outcome of an operation that may legitimately change nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Success,
    InvalidFormat,
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Add,
    Remove,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            other => Err(format!("invalid mode {other}")),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a chat is currently doing. A missing session and a session without an
/// active sticker look the same.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserState {
    pub sticker_file_id: Option<String>,
    pub mode: Option<Mode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagChange {
    pub status: OperationStatus,
    pub count: usize,
}

impl TagChange {
    #[must_use]
    pub const fn no_change() -> Self {
        Self {
            status: OperationStatus::NoChange,
            count: 0,
        }
    }

    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::no_change()
        } else {
            Self {
                status: OperationStatus::Success,
                count,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    pub sticker_file_ids: Vec<String>,
    pub next_offset: Option<i64>,
}

#[derive(QueryableByName, Debug)]
pub(super) struct StickerMatch {
    #[diesel(sql_type = Text)]
    pub file_id: String,
}

pub(super) fn parse_mode(mode: Option<String>) -> Option<Mode> {
    mode.and_then(|mode| match mode.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!("{err}");
            None
        }
    })
}
