//! Discrete action space
//!
//! Agents pick one of three actions per tick. Raw indices coming from an
//! exploring agent are mapped totally: anything out of range holds.

use serde::{Deserialize, Serialize};

/// Number of discrete actions
pub const ACTION_COUNT: usize = 3;

/// Paddle command for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    #[default]
    Hold,
}

impl Action {
    /// All actions in index order
    pub const ALL: [Action; ACTION_COUNT] = [Action::MoveLeft, Action::MoveRight, Action::Hold];

    /// Decode an action index (0 = left, 1 = right, 2 = hold). Out-of-range
    /// indices (including negative ones) decode to `Hold`.
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => Action::MoveLeft,
            1 => Action::MoveRight,
            _ => Action::Hold,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Action::MoveLeft => 0,
            Action::MoveRight => 1,
            Action::Hold => 2,
        }
    }

    /// Signed horizontal direction of the paddle move
    #[inline]
    pub fn direction(self) -> f32 {
        match self {
            Action::MoveLeft => -1.0,
            Action::MoveRight => 1.0,
            Action::Hold => 0.0,
        }
    }
}

impl From<usize> for Action {
    fn from(index: usize) -> Self {
        Action::from_index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

/// Per-tick keyboard snapshot for human play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Both or neither held cancels out to `Hold`
    pub fn to_action(self) -> Action {
        match (self.left, self.right) {
            (true, false) => Action::MoveLeft,
            (false, true) => Action::MoveRight,
            _ => Action::Hold,
        }
    }
}

impl From<HeldKeys> for Action {
    fn from(keys: HeldKeys) -> Self {
        keys.to_action()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for action in Action::ALL {
            assert_eq!(Action::from_index(action.index() as i64), action);
        }
    }

    #[test]
    fn test_out_of_range_holds() {
        assert_eq!(Action::from_index(3), Action::Hold);
        assert_eq!(Action::from_index(-1), Action::Hold);
        assert_eq!(Action::from(usize::MAX), Action::Hold);
    }

    #[test]
    fn test_held_keys() {
        let keys = |left, right| HeldKeys { left, right }.to_action();
        assert_eq!(keys(true, false), Action::MoveLeft);
        assert_eq!(keys(false, true), Action::MoveRight);
        assert_eq!(keys(true, true), Action::Hold);
        assert_eq!(keys(false, false), Action::Hold);
    }
}
