use teloxide::utils::command::BotCommands;

use crate::bot::{BotError, RequestContext};
use crate::text::Text;

use super::user::show_group;

/// Aliases that work but are not advertised in the command menu.
#[derive(BotCommands, Debug, Clone, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Hidden commands")]
pub enum HiddenCommand {
    #[command(description = "show the id of your group")]
    MyGroup,

    #[command(description = "show the id of your group")]
    GetGroup,

    #[command(description = "explain how groups work")]
    HelpGroup,
}

impl HiddenCommand {
    #[tracing::instrument(skip(self, request_context), err(Debug))]
    pub async fn execute(
        self,
        chat_id: i64,
        request_context: RequestContext,
    ) -> Result<String, BotError> {
        match self {
            Self::MyGroup | Self::GetGroup => show_group(chat_id, &request_context).await,
            Self::HelpGroup => Ok(Text::group_help(request_context.bot_username())),
        }
    }
}
