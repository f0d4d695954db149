use teloxide::{types::BotCommand, utils::command::BotCommands};

use crate::bot::{BotError, RequestContext, UserError};
use crate::database::Mode;
use crate::text::Text;
use crate::util::Required;

#[derive(BotCommands, Debug, Clone, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands")]
pub enum RegularCommand {
    #[command(description = "show welcome message")]
    Start,

    #[command(description = "display help text")]
    Help,

    #[command(description = "add tags to the current sticker")]
    Add { tags: String },

    #[command(description = "remove tags from the current sticker")]
    Remove { tags: String },

    #[command(description = "show the id of your group")]
    Group,

    #[command(description = "join the group with the given id")]
    JoinGroup { group_id: String },

    #[command(description = "explain how groups work")]
    HelpGroups,
}

impl RegularCommand {
    #[must_use]
    pub fn list_visible() -> Vec<BotCommand> {
        Self::bot_commands()
    }

    #[tracing::instrument(skip(self, request_context), err(Debug))]
    pub async fn execute(
        self,
        chat_id: i64,
        request_context: RequestContext,
    ) -> Result<String, BotError> {
        let database = &request_context.database;
        match self {
            Self::Start | Self::Help => Ok(Text::help(request_context.bot_username())),
            Self::Add { tags } => {
                let (group_id, sticker_file_id) = database.set_mode(chat_id, Mode::Add).await?;
                if tags.trim().is_empty() {
                    return Ok(Text::add_mode_prompt());
                }
                let sticker_file_id = sticker_file_id.ok_or(UserError::NoActiveSticker)?;
                let change = database
                    .add_keywords(&sticker_file_id, &tags, group_id)
                    .await?;
                Ok(Text::now_in_add_mode(&Text::tags_added(change)))
            }
            Self::Remove { tags } => {
                let (group_id, sticker_file_id) =
                    database.set_mode(chat_id, Mode::Remove).await?;
                if tags.trim().is_empty() {
                    return Ok(Text::remove_mode_prompt());
                }
                let sticker_file_id = sticker_file_id.ok_or(UserError::NoActiveSticker)?;
                let change = database
                    .remove_keywords(&sticker_file_id, &tags, group_id)
                    .await?;
                Ok(Text::tags_removed(change))
            }
            Self::Group => show_group(chat_id, &request_context).await,
            Self::JoinGroup { group_id } => {
                if group_id.trim().is_empty() {
                    return Ok(Text::join_group_usage());
                }
                let status = database.assign_to_group(chat_id, group_id).await?;
                Ok(Text::join_group_result(status))
            }
            Self::HelpGroups => Ok(Text::group_help(request_context.bot_username())),
        }
    }
}

pub(super) async fn show_group(
    chat_id: i64,
    request_context: &RequestContext,
) -> Result<String, BotError> {
    let database = &request_context.database;
    database.get_or_create_group(chat_id).await?;
    let group_uuid = database.get_group_uuid(chat_id).await?.required()?;
    Ok(Text::your_group(&group_uuid))
}
