//! Qutrit energy levels, two-level subspaces and basis states.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{QutritError, QutritResult};

/// Number of levels in a qutrit.
pub const DIM: usize = 3;

/// One of the three energy levels of a qutrit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Ground level |g⟩, index 0.
    #[serde(rename = "g")]
    Ground,
    /// First excited level |e⟩, index 1.
    #[serde(rename = "e")]
    Excited,
    /// Second excited level |h⟩, index 2.
    #[serde(rename = "h")]
    Higher,
}

impl Level {
    /// All levels in basis order.
    pub const ALL: [Level; DIM] = [Level::Ground, Level::Excited, Level::Higher];

    /// Position of this level in the (g, e, h) basis.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Level::Ground => 0,
            Level::Excited => 1,
            Level::Higher => 2,
        }
    }

    /// Single-character label used in the lab notebooks.
    #[inline]
    pub fn label(self) -> char {
        match self {
            Level::Ground => 'g',
            Level::Excited => 'e',
            Level::Higher => 'h',
        }
    }

    /// Look up a level by basis index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// One-hot basis vector for this level.
    pub fn basis_state(self) -> [f64; DIM] {
        let mut state = [0.0; DIM];
        state[self.index()] = 1.0;
        state
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Level {
    type Err = QutritError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(Level::Ground),
            "e" => Ok(Level::Excited),
            "h" => Ok(Level::Higher),
            other => Err(QutritError::UnknownBasisLabel(other.to_string())),
        }
    }
}

/// One-hot basis vector for a single-character label (`g`, `e` or `h`).
///
/// # Errors
///
/// Returns [`QutritError::UnknownBasisLabel`] for any other input, including
/// multi-character strings such as `"ge"`.
pub fn basis_state(label: &str) -> QutritResult<[f64; DIM]> {
    label.parse::<Level>().map(Level::basis_state)
}

/// A pair of adjacent levels that a two-level gate acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subspace {
    /// Levels 0 and 1.
    #[serde(rename = "01")]
    S01,
    /// Levels 1 and 2.
    #[serde(rename = "12")]
    S12,
}

impl Subspace {
    /// Both subspaces.
    pub const ALL: [Subspace; 2] = [Subspace::S01, Subspace::S12];

    /// Basis indices of the two active levels, lower level first.
    #[inline]
    pub fn active(self) -> (usize, usize) {
        match self {
            Subspace::S01 => (0, 1),
            Subspace::S12 => (1, 2),
        }
    }

    /// The level left untouched by gates on this subspace.
    #[inline]
    pub fn spectator(self) -> Level {
        match self {
            Subspace::S01 => Level::Higher,
            Subspace::S12 => Level::Ground,
        }
    }

    /// Short name, `01` or `12`.
    pub fn name(self) -> &'static str {
        match self {
            Subspace::S01 => "01",
            Subspace::S12 => "12",
        }
    }
}

impl fmt::Display for Subspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Subspace {
    type Err = QutritError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "01" => Ok(Subspace::S01),
            "12" => Ok(Subspace::S12),
            other => Err(QutritError::UnknownSubspace(other.to_string())),
        }
    }
}

/// A level that can carry an absolute phase: 0 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PhaseLevel {
    /// Level 0 (|g⟩).
    L0,
    /// Level 2 (|h⟩).
    L2,
}

impl PhaseLevel {
    /// The underlying qutrit level.
    #[inline]
    pub fn level(self) -> Level {
        match self {
            PhaseLevel::L0 => Level::Ground,
            PhaseLevel::L2 => Level::Higher,
        }
    }
}

impl fmt::Display for PhaseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level().index())
    }
}

impl TryFrom<u8> for PhaseLevel {
    type Error = QutritError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PhaseLevel::L0),
            2 => Ok(PhaseLevel::L2),
            other => Err(QutritError::UnknownLevel(other.to_string())),
        }
    }
}

impl From<PhaseLevel> for u8 {
    fn from(level: PhaseLevel) -> Self {
        match level {
            PhaseLevel::L0 => 0,
            PhaseLevel::L2 => 2,
        }
    }
}

impl FromStr for PhaseLevel {
    type Err = QutritError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(PhaseLevel::L0),
            "2" => Ok(PhaseLevel::L2),
            other => Err(QutritError::UnknownLevel(other.to_string())),
        }
    }
}
