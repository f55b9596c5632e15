//! Game modes: which matrix governs each step of a trial.
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// The four ways of choosing the active game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Game A for the whole trial.
    FixedA,
    /// Game B for the whole trial.
    FixedB,
    /// Fair random choice before every transition.
    UniformSwitch,
    /// Random choice biased by the current state's order parameter.
    CorrelatedSwitch,
}

impl GameMode {
    pub const ALL: [Self; 4] = [
        Self::FixedA,
        Self::FixedB,
        Self::UniformSwitch,
        Self::CorrelatedSwitch,
    ];

    /// Integer code used on the command line.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::FixedA => 0,
            Self::FixedB => 1,
            Self::UniformSwitch => 2,
            Self::CorrelatedSwitch => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FixedA => "game A",
            Self::FixedB => "game B",
            Self::UniformSwitch => "uniform switching",
            Self::CorrelatedSwitch => "correlated switching",
        }
    }

    /// Whether the selector consumes a random draw for this mode.
    #[must_use]
    pub const fn is_switching(self) -> bool {
        matches!(self, Self::UniformSwitch | Self::CorrelatedSwitch)
    }
}

impl TryFrom<i64> for GameMode {
    type Error = SimulationError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::FixedA),
            1 => Ok(Self::FixedB),
            2 => Ok(Self::UniformSwitch),
            3 => Ok(Self::CorrelatedSwitch),
            other => Err(SimulationError::InvalidGameMode(other)),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
