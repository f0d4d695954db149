use teloxide::utils::command::{BotCommands, ParseError};

use crate::{
    background_tasks::EnrichSet,
    bot::{report_bot_error, BotError, InternalError, Message, RequestContext, Sticker, UserError, WebhookReply},
    database::Mode,
    text::Text,
};

use super::command::{normalize_command, HiddenCommand, RegularCommand};

const fn is_unknown_command(err: &ParseError) -> bool {
    matches!(err, ParseError::UnknownCommand(_))
}

/// Turns user errors into replies; only internal errors are passed on.
#[tracing::instrument(skip(request_context, msg), fields(chat_id = msg.chat.id))]
pub async fn message_handler_wrapper(
    msg: Message,
    request_context: RequestContext,
) -> Result<WebhookReply, InternalError> {
    let chat_id = msg.chat.id;
    match message_handler(msg, request_context).await {
        Ok(text) => Ok(WebhookReply::text(chat_id, text)),
        Err(error) => {
            report_bot_error(&error);
            match error {
                BotError::UserError(error) => Ok(WebhookReply::text(chat_id, error.end_user_error())),
                BotError::InternalError(error) => Err(error),
            }
        }
    }
}

#[tracing::instrument(skip(request_context, msg), err(Debug))]
pub async fn message_handler(
    msg: Message,
    request_context: RequestContext,
) -> Result<String, BotError> {
    let chat_id = msg.chat.id;
    let replied_sticker = msg
        .reply_to_message
        .as_ref()
        .and_then(|reply| reply.sticker.as_ref());

    match (msg.text.as_deref(), replied_sticker, &msg.sticker) {
        (Some(text), _, _) if text.trim_start().starts_with('/') => {
            handle_command(text, chat_id, request_context).await
        }
        (Some(text), Some(replied_sticker), _) => {
            let group_id = request_context.database.get_or_create_group(chat_id).await?;
            let change = request_context
                .database
                .add_keywords(&replied_sticker.file_id, text, group_id)
                .await?;
            Ok(Text::tags_added(change))
        }
        (Some(text), None, _) => handle_keyword_message(text, chat_id, request_context).await,
        (None, _, Some(sticker)) => handle_sticker_message(sticker, chat_id, request_context).await,
        (None, _, None) => Err(UserError::UnhandledMessageType.into()),
    }
}

#[tracing::instrument(skip(request_context))]
async fn handle_command(
    text: &str,
    chat_id: i64,
    request_context: RequestContext,
) -> Result<String, BotError> {
    let text = &normalize_command(text);
    let bot_username = request_context.config.telegram_bot_username.clone();
    match RegularCommand::parse(text, &bot_username) {
        Ok(command) => return command.execute(chat_id, request_context).await,
        Err(err) => {
            if !is_unknown_command(&err) {
                return Err(UserError::CommandError(err).into());
            }
        }
    }

    match HiddenCommand::parse(text, &bot_username) {
        Ok(command) => command.execute(chat_id, request_context).await,
        Err(err) => Err(UserError::CommandError(err).into()),
    }
}

#[tracing::instrument(skip(request_context))]
async fn handle_keyword_message(
    text: &str,
    chat_id: i64,
    request_context: RequestContext,
) -> Result<String, BotError> {
    let database = &request_context.database;
    let state = database.get_user_state(chat_id).await?;
    let sticker_file_id = state.sticker_file_id.ok_or(UserError::NoActiveSticker)?;
    let group_id = database.get_or_create_group(chat_id).await?;
    match state.mode.unwrap_or_default() {
        Mode::Add => Ok(Text::tags_added(
            database.add_keywords(&sticker_file_id, text, group_id).await?,
        )),
        Mode::Remove => Ok(Text::tags_removed(
            database
                .remove_keywords(&sticker_file_id, text, group_id)
                .await?,
        )),
    }
}

#[tracing::instrument(skip(request_context, sticker), fields(sticker_id = %sticker.file_id, set_name = ?sticker.set_name))]
async fn handle_sticker_message(
    sticker: &Sticker,
    chat_id: i64,
    request_context: RequestContext,
) -> Result<String, BotError> {
    let database = &request_context.database;
    let (group_id, mode) = database
        .set_active_sticker_and_get_mode(chat_id, sticker.file_id.clone())
        .await?;
    let current_keywords = database
        .get_keywords_for_sticker(&sticker.file_id, group_id)
        .await?;

    if let Some(set_name) = &sticker.set_name {
        request_context.enrichment_worker.submit(EnrichSet {
            set_name: set_name.clone(),
            group_id,
        });
    }

    Ok(Text::sticker_received(mode, &current_keywords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::{test_context, Chat};

    fn message(chat_id: i64) -> Message {
        Message {
            chat: Chat { id: chat_id },
            from: None,
            text: None,
            sticker: None,
            reply_to_message: None,
        }
    }

    fn text(chat_id: i64, text: &str) -> Message {
        Message {
            text: Some(text.to_string()),
            ..message(chat_id)
        }
    }

    fn sticker(chat_id: i64, file_id: &str) -> Message {
        Message {
            sticker: Some(Sticker {
                file_id: file_id.to_string(),
                emoji: None,
                set_name: None,
            }),
            ..message(chat_id)
        }
    }

    async fn reply(msg: Message, request_context: &RequestContext) -> String {
        let chat_id = msg.chat.id;
        match message_handler_wrapper(msg, request_context.clone()).await.unwrap() {
            WebhookReply::SendMessage { chat_id: reply_chat_id, text } => {
                assert_eq!(reply_chat_id, chat_id);
                text
            }
            other => panic!("expected a text reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn add_and_remove_tags() -> anyhow::Result<()> {
        let (ctx, _dir) = test_context().await;
        assert_eq!(
            reply(sticker(1, "s1"), &ctx).await,
            "That's a nice sticker. Send me some tags and I'll add them to it."
        );
        assert_eq!(reply(text(1, "Cat dog"), &ctx).await, "Added 2 tags.");
        assert_eq!(reply(text(1, "cat"), &ctx).await, "Those tags are already on this sticker.");

        assert_eq!(
            reply(text(1, "/remove"), &ctx).await,
            "Okay, send me the tags you'd like to remove from the sticker."
        );
        assert_eq!(reply(text(1, "ca"), &ctx).await, "You have deleted 1 tag.");
        assert_eq!(reply(text(1, "zzz"), &ctx).await, "None of those tags were on this sticker.");
        assert_eq!(
            reply(sticker(1, "s1"), &ctx).await,
            "That's a nice sticker. Send me the tags you'd like to remove from it.\nCurrent tags: dog"
        );
        Ok(())
    }

    #[tokio::test]
    async fn add_command_with_tags() -> anyhow::Result<()> {
        let (ctx, _dir) = test_context().await;
        assert_eq!(
            reply(text(1, "/add cat"), &ctx).await,
            "Send a sticker to me then I'll be able to add tags to it."
        );
        assert_eq!(
            reply(text(1, "/add"), &ctx).await,
            "Okay, send me some tags and I'll add them to the sticker."
        );
        reply(sticker(1, "s1"), &ctx).await;
        reply(text(1, "/remove"), &ctx).await;
        assert_eq!(
            reply(text(1, "/add cat"), &ctx).await,
            "You are now in add mode.\nAdded 1 tag."
        );
        assert_eq!(reply(text(1, "dog"), &ctx).await, "Added 1 tag.");
        Ok(())
    }

    #[tokio::test]
    async fn reply_to_a_sticker_tags_that_sticker() -> anyhow::Result<()> {
        let (ctx, _dir) = test_context().await;
        reply(sticker(1, "active"), &ctx).await;
        let msg = Message {
            reply_to_message: Some(Box::new(sticker(1, "replied"))),
            ..text(1, "cat")
        };
        assert_eq!(reply(msg, &ctx).await, "Added 1 tag.");

        let group_id = ctx.database.get_or_create_group(1).await?;
        assert_eq!(
            ctx.database.search_stickers("cat", group_id, 0).await?.sticker_file_ids,
            vec!["replied"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn joined_groups_share_tags() -> anyhow::Result<()> {
        let (ctx, _dir) = test_context().await;
        let shown = reply(text(1, "/group"), &ctx).await;
        let uuid = ctx.database.get_group_uuid(1).await?.unwrap();
        assert!(shown.contains(&uuid));
        assert_eq!(reply(text(1, "/mygroup"), &ctx).await, shown);

        assert!(reply(text(2, "/joingroup nonsense"), &ctx)
            .await
            .starts_with("That doesn't look like a group id."));
        assert!(reply(text(2, "/joingroup"), &ctx)
            .await
            .starts_with("Send me the id of the group"));
        assert_eq!(
            reply(text(2, &format!("/joingroup {uuid}")), &ctx).await,
            "You joined the group. Your searches now use its keywords."
        );
        assert!(reply(text(2, &format!("/JoinGroup {uuid}")), &ctx)
            .await
            .starts_with("Nothing changed"));

        reply(sticker(2, "s2"), &ctx).await;
        reply(text(2, "shared"), &ctx).await;
        let group_id = ctx.database.get_or_create_group(1).await?;
        assert_eq!(
            ctx.database.search_stickers("shared", group_id, 0).await?.sticker_file_ids,
            vec!["s2"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_input() -> anyhow::Result<()> {
        let (ctx, _dir) = test_context().await;
        assert_eq!(reply(text(1, "/frobnicate"), &ctx).await, "I don't recognise this command.");
        assert_eq!(
            reply(message(1), &ctx).await,
            "I don't know how to interpret your message."
        );
        assert!(reply(text(1, "/help"), &ctx).await.contains("/add"));
        Ok(())
    }
}
