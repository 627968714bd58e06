//! Activation flags and access directions.
//!
//! Interception can be live for reads, writes, both, or neither, and the
//! flag that records this comes in two shapes: a single scalar covering both
//! directions, or a structured pair toggled per direction. [`ActiveState`]
//! is that tagged union; [`Direction`] names the axis an operation targets.
//!
//! # Toggle precedence
//!
//! Toggling a specific direction mutates a sub-field **only** when the state
//! is already [`PerDirection`][ActiveState::PerDirection]. In every other
//! case — the state is [`Uniform`][ActiveState::Uniform], or the toggle
//! targets both directions — the whole flag is replaced with a uniform
//! scalar, discarding any prior structured form. This exact precedence is
//! observable behavior and is relied on by callers that probe the flag's
//! shape after toggling.

use std::fmt;
use std::str::FromStr;

use crate::error::SnareError;

/// The axis of property access an operation targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Reads and writes together.
    Both,
    /// Read interception only.
    OnGet,
    /// Write interception only.
    OnSet,
}

impl Direction {
    /// The wire name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::OnGet => "onGet",
            Self::OnSet => "onSet",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SnareError;

    /// Parses a direction name.
    ///
    /// Accepts exactly `both`, `onGet`, and `onSet`; anything else is an
    /// [`SnareError::InvalidDirection`] naming the offending value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Self::Both),
            "onGet" => Ok(Self::OnGet),
            "onSet" => Ok(Self::OnSet),
            other => Err(SnareError::InvalidDirection(other.to_string())),
        }
    }
}

/// The activation flag of a controlled descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActiveState {
    /// One scalar shared by both directions.
    Uniform(bool),
    /// Independent flags per direction.
    PerDirection {
        /// Read interception live.
        on_get: bool,
        /// Write interception live.
        on_set: bool,
    },
}

impl ActiveState {
    /// Builds a per-direction state from a partial configuration; absent
    /// sub-fields read as `false`.
    pub fn per_direction(on_get: Option<bool>, on_set: Option<bool>) -> Self {
        Self::PerDirection {
            on_get: on_get.unwrap_or(false),
            on_set: on_set.unwrap_or(false),
        }
    }

    /// Returns `true` if this state is the uniform scalar form.
    #[inline]
    pub fn is_uniform(self) -> bool {
        matches!(self, Self::Uniform(_))
    }

    /// Returns the scalar value of a uniform state, or `None` for the
    /// per-direction form.
    pub fn as_uniform(self) -> Option<bool> {
        match self {
            Self::Uniform(value) => Some(value),
            Self::PerDirection { .. } => None,
        }
    }

    /// Whether interception is live for `direction`.
    ///
    /// `Both` holds for a uniform `true`, or a per-direction state with both
    /// sub-fields set. A specific direction reads its sub-field in the
    /// per-direction form, and the shared scalar in the uniform form.
    pub fn covers(self, direction: Direction) -> bool {
        match (self, direction) {
            (Self::Uniform(value), _) => value,
            (Self::PerDirection { on_get, on_set }, Direction::Both) => on_get && on_set,
            (Self::PerDirection { on_get, .. }, Direction::OnGet) => on_get,
            (Self::PerDirection { on_set, .. }, Direction::OnSet) => on_set,
        }
    }

    /// Applies a toggle, following the precedence documented on the module.
    pub fn apply(&mut self, direction: Direction, value: bool) {
        match (&mut *self, direction) {
            (Self::PerDirection { on_get, .. }, Direction::OnGet) => *on_get = value,
            (Self::PerDirection { on_set, .. }, Direction::OnSet) => *on_set = value,
            (state, _) => *state = Self::Uniform(value),
        }
    }
}

impl Default for ActiveState {
    /// The default activation state: uniformly live.
    fn default() -> Self {
        Self::Uniform(true)
    }
}

impl From<bool> for ActiveState {
    fn from(value: bool) -> Self {
        Self::Uniform(value)
    }
}
