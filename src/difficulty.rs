use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// How fast the snake moves
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    Beginner,
    #[default]
    Medium,
    Advanced,
}

impl Difficulty {
    /// Time between two movements of the snake
    pub(crate) fn interval(self) -> Duration {
        match self {
            Difficulty::Beginner => Duration::from_millis(200),
            Difficulty::Medium => Duration::from_millis(130),
            Difficulty::Advanced => Duration::from_millis(80),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Medium => "Medium",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// The key that picks this difficulty in the difficulty menu
    pub(crate) fn hotkey(self) -> &'static str {
        match self {
            Difficulty::Beginner => "1",
            Difficulty::Medium => "2",
            Difficulty::Advanced => "3",
        }
    }

    pub(crate) fn from_hotkey(ch: char) -> Option<Difficulty> {
        match ch {
            '1' => Some(Difficulty::Beginner),
            '2' => Some(Difficulty::Medium),
            '3' => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
