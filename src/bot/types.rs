use serde::{Deserialize, Serialize};

// only the parts of the bot api update that are used; unknown fields are ignored

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Update {
    pub message: Option<Message>,
    pub inline_query: Option<InlineQuery>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Message {
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
    pub sticker: Option<Sticker>,
    pub reply_to_message: Option<Box<Message>>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Chat {
    pub id: i64,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct User {
    pub id: i64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Sticker {
    pub file_id: String,
    pub emoji: Option<String>,
    pub set_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    pub query: String,
    #[serde(default)]
    pub offset: String,
}

/// The single action returned in the webhook response body.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "method")]
pub enum WebhookReply {
    #[serde(rename = "sendMessage")]
    SendMessage { chat_id: i64, text: String },

    #[serde(rename = "answerInlineQuery")]
    AnswerInlineQuery {
        inline_query_id: String,
        results: Vec<InlineQueryResultCachedSticker>,
        cache_time: u32,
        is_personal: bool,
        next_offset: String,
    },
}

impl WebhookReply {
    #[must_use]
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self::SendMessage {
            chat_id,
            text: text.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InlineQueryResultCachedSticker {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: String,
    pub sticker_file_id: String,
}

impl InlineQueryResultCachedSticker {
    #[must_use]
    pub fn new(id: String, sticker_file_id: String) -> Self {
        Self {
            kind: "sticker",
            id,
            sticker_file_id,
        }
    }
}
