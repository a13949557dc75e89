//! Game setup.
//!
//! A game mode fixes which kind of player sits on each side. Modes are
//! numbered 1 to 4 for the selection prompt.

use std::fmt;
use std::str::FromStr;

use crate::player::PlayerKind;

/// Errors raised while configuring a game. Reported once, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("unsupported game mode: '{0}' (expected 1, 2, 3 or 4)")]
    UnsupportedModeSelection(String),

    #[error("unknown player kind: '{0}' (expected human, random or smart)")]
    UnknownPlayerKind(String),
}

/// Supported player pairings. Player one is listed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    HumanVsRandomBot,
    HumanVsSmartBot,
    HumanVsHuman,
    SmartBotVsSmartBot,
}

pub const ALL_MODES: [GameMode; 4] = [
    GameMode::HumanVsRandomBot,
    GameMode::HumanVsSmartBot,
    GameMode::HumanVsHuman,
    GameMode::SmartBotVsSmartBot,
];

impl GameMode {
    /// The number used to select this mode.
    pub const fn number(self) -> u8 {
        match self {
            GameMode::HumanVsRandomBot => 1,
            GameMode::HumanVsSmartBot => 2,
            GameMode::HumanVsHuman => 3,
            GameMode::SmartBotVsSmartBot => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<GameMode> {
        ALL_MODES.iter().copied().find(|m| m.number() == n)
    }

    /// Player kinds for side one and side two.
    pub const fn player_kinds(self) -> [PlayerKind; 2] {
        match self {
            GameMode::HumanVsRandomBot => [PlayerKind::Human, PlayerKind::RandomBot],
            GameMode::HumanVsSmartBot => [PlayerKind::Human, PlayerKind::SmartBot],
            GameMode::HumanVsHuman => [PlayerKind::Human, PlayerKind::Human],
            GameMode::SmartBotVsSmartBot => [PlayerKind::SmartBot, PlayerKind::SmartBot],
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            GameMode::HumanVsRandomBot => "One player against the easy computer",
            GameMode::HumanVsSmartBot => "One player against the hard computer",
            GameMode::HumanVsHuman => "Two players",
            GameMode::SmartBotVsSmartBot => "Computer against computer",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number(), self.description())
    }
}

impl FromStr for GameMode {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(GameMode::from_number)
            .ok_or_else(|| SetupError::UnsupportedModeSelection(trimmed.to_string()))
    }
}
