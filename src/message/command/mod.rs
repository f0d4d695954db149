mod hidden;
mod user;
mod util;

pub use hidden::HiddenCommand;
use teloxide::{types::BotCommand, utils::command::BotCommands};
pub use user::RegularCommand;
pub use util::*;

pub fn list_visible_user_commands() -> Vec<BotCommand> {
    RegularCommand::list_visible()
}

pub fn user_command_description() -> String {
    RegularCommand::descriptions().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: &str = "stickerman_test_bot";

    #[test]
    fn parse_commands() {
        assert_eq!(RegularCommand::parse("/start", BOT).ok(), Some(RegularCommand::Start));
        assert_eq!(
            RegularCommand::parse("/add cat dog", BOT).ok(),
            Some(RegularCommand::Add {
                tags: "cat dog".to_string()
            })
        );
        assert_eq!(
            RegularCommand::parse("/remove", BOT).ok(),
            Some(RegularCommand::Remove {
                tags: String::new()
            })
        );
        assert_eq!(
            RegularCommand::parse(&normalize_command("/joinGroup abc"), BOT).ok(),
            Some(RegularCommand::JoinGroup {
                group_id: "abc".to_string()
            })
        );
        assert_eq!(
            RegularCommand::parse(&normalize_command("/helpGroups"), BOT).ok(),
            Some(RegularCommand::HelpGroups)
        );
        assert_eq!(HiddenCommand::parse("/mygroup", BOT).ok(), Some(HiddenCommand::MyGroup));
        assert_eq!(HiddenCommand::parse("/helpgroup", BOT).ok(), Some(HiddenCommand::HelpGroup));
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(
            RegularCommand::parse("/frobnicate", BOT),
            Err(teloxide::utils::command::ParseError::UnknownCommand(_))
        ));
    }

    #[test]
    fn visible_commands_do_not_include_aliases() {
        let commands = list_visible_user_commands();
        let names = commands
            .iter()
            .map(|command| command.command.trim_start_matches('/'))
            .collect::<Vec<_>>();
        assert!(names.contains(&"joingroup"));
        assert!(!names.contains(&"mygroup"));
        assert!(user_command_description().contains("helpgroups"));
    }
}
