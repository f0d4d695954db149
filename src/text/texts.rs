use crate::{
    database::{Mode, OperationStatus, TagChange},
    message::user_command_description,
};

/*
 * All text here is sent as plain text
 */

pub struct Text;

impl Text {
    #[must_use]
    pub fn help(bot_username: &str) -> String {
        format!(
            "This bot helps you find stickers by the keywords you give them.

To tag a sticker, send it to me and then send the keywords as a message (or reply to the sticker with them). Use /remove to switch to removing keywords and /add to switch back.

To search, type @{bot_username} followed by your keywords in any chat.

Your keywords are private to your group. See /helpgroups to share them with friends.

{}",
            user_command_description()
        )
    }

    #[must_use]
    pub fn group_help(bot_username: &str) -> String {
        format!(
            "Everybody in a group shares the same keywords: stickers tagged by one member can be found by all of them with @{bot_username}.

Use /group to get the id of your group and send it to a friend. They can join it with /joingroup followed by the id."
        )
    }

    #[must_use]
    pub fn your_group(group_uuid: &str) -> String {
        format!(
            "Your group id is:\n{group_uuid}\n\nAnyone who sends me /joingroup {group_uuid} will share your keywords."
        )
    }

    #[must_use]
    pub fn join_group_result(status: OperationStatus) -> String {
        match status {
            OperationStatus::Success => {
                "You joined the group. Your searches now use its keywords.".to_string()
            }
            OperationStatus::InvalidFormat => "That doesn't look like a group id. It should look like this:\n/joingroup 123e4567-e89b-42d3-a456-426614174000".to_string(),
            OperationStatus::NoChange => {
                "Nothing changed: that group doesn't exist or you are already in it.".to_string()
            }
        }
    }

    #[must_use]
    pub fn join_group_usage() -> String {
        "Send me the id of the group you want to join, like this:\n/joingroup 123e4567-e89b-42d3-a456-426614174000".to_string()
    }

    #[must_use]
    pub fn tags_added(change: TagChange) -> String {
        match (change.status, change.count) {
            (OperationStatus::Success, 1) => "Added 1 tag.".to_string(),
            (OperationStatus::Success, count) => format!("Added {count} tags."),
            _ => "Those tags are already on this sticker.".to_string(),
        }
    }

    #[must_use]
    pub fn tags_removed(change: TagChange) -> String {
        match (change.status, change.count) {
            (OperationStatus::Success, 1) => "You have deleted 1 tag.".to_string(),
            (OperationStatus::Success, count) => format!("You have deleted {count} tags."),
            _ => "None of those tags were on this sticker.".to_string(),
        }
    }

    #[must_use]
    pub fn now_in_add_mode(added: &str) -> String {
        format!("You are now in add mode.\n{added}")
    }

    #[must_use]
    pub fn add_mode_prompt() -> String {
        "Okay, send me some tags and I'll add them to the sticker.".to_string()
    }

    #[must_use]
    pub fn remove_mode_prompt() -> String {
        "Okay, send me the tags you'd like to remove from the sticker.".to_string()
    }

    #[must_use]
    pub fn sticker_received(mode: Mode, current_keywords: &[String]) -> String {
        let prompt = match mode {
            Mode::Add => "That's a nice sticker. Send me some tags and I'll add them to it.",
            Mode::Remove => {
                "That's a nice sticker. Send me the tags you'd like to remove from it."
            }
        };
        if current_keywords.is_empty() {
            prompt.to_string()
        } else {
            format!("{prompt}\nCurrent tags: {}", current_keywords.join(", "))
        }
    }

    #[must_use]
    pub fn send_sticker_first() -> String {
        "Send a sticker to me then I'll be able to add tags to it.".to_string()
    }

    #[must_use]
    pub fn unknown_command() -> String {
        "I don't recognise this command.".to_string()
    }

    #[must_use]
    pub fn unhandled_message() -> String {
        "I don't know how to interpret your message.".to_string()
    }

    #[must_use]
    pub fn internal_error() -> String {
        "Something went wrong :(".to_string()
    }
}
