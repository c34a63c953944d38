//! Slash commands
//!
//! Only informational commands live here; claiming is handled elsewhere.

use friemon::{Character, Stat};
use serenity::builder::CreateCommand;
use serenity::http::Http;
use serenity::model::application::Command;
use serenity::model::id::GuildId;
use tracing::info;

pub const VERSION_COMMAND: &str = "version";
pub const CHARACTER_COMMAND: &str = "character";

/// Build info reported by `/version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
}

impl BuildInfo {
    pub fn new(version: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            commit: commit.into(),
        }
    }
}

/// All command definitions
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(VERSION_COMMAND).description("Show the bot version"),
        CreateCommand::new(CHARACTER_COMMAND)
            .description("Show the character waiting in this channel")
            .dm_permission(false),
    ]
}

/// Register commands in the given guilds, or globally when none are given
pub async fn sync_commands(http: &Http, guilds: &[u64]) -> Result<(), serenity::Error> {
    if guilds.is_empty() {
        let commands = Command::set_global_commands(http, definitions()).await?;
        info!(count = commands.len(), "Synced global commands");
        return Ok(());
    }

    for guild in guilds {
        let commands = GuildId::new(*guild).set_commands(http, definitions()).await?;
        info!(guild_id = %guild, count = commands.len(), "Synced guild commands");
    }

    Ok(())
}

pub fn version_reply(build: &BuildInfo) -> String {
    format!("Version: {}\nCommit: {}", build.version, build.commit)
}

pub fn character_reply(character: Option<&Character>) -> String {
    let Some(character) = character else {
        return "No character is wandering around this channel right now.".to_string();
    };

    let stats = character.effective_stats();
    let lines: Vec<String> = Stat::ALL
        .iter()
        .map(|stat| format!("{}: {}", stat.key(), stats.get(*stat)))
        .collect();

    format!(
        "**{}** (#{}) is waiting to be claimed!\nLevel {} · {}\n{}",
        character.name,
        character.id,
        character.level,
        character.personality,
        lines.join(" | ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use friemon::{Personality, Stats};

    #[test]
    fn test_character_reply_lists_effective_stats() {
        let fern = Character::new(4, "Fern", Personality::Merry, 12, Stats::new(70, 50, 55, 90, 70, 80));
        let reply = character_reply(Some(&fern));

        assert!(reply.contains("**Fern** (#4)"));
        assert!(reply.contains("Level 12 · Merry"));
        assert!(reply.contains("satk: 99"));
        assert!(reply.contains("spd: 88"));
        assert!(reply.contains("hp: 70"));
    }

    #[test]
    fn test_character_reply_without_character() {
        assert!(character_reply(None).contains("No character"));
    }

    #[test]
    fn test_version_reply() {
        let reply = version_reply(&BuildInfo::new("0.1.0", "abc123"));
        assert_eq!(reply, "Version: 0.1.0\nCommit: abc123");
    }

    #[test]
    fn test_definitions_cover_every_command() {
        assert_eq!(definitions().len(), 2);
    }
}
