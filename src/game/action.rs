/// Heading of the snake, stored as a rotation index
///
/// The discriminants are the rotation index: turning right adds one,
/// turning left subtracts one, both modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// Rotation index in `0..4`
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Direction for a rotation index, taken modulo 4
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }

    /// Direction after applying a relative turn
    pub fn rotated(self, turn: Turn) -> Self {
        let index = (self.index() as i8 + turn.delta()).rem_euclid(4);
        Self::from_index(index as u8)
    }

    /// Returns the delta (dx, dy) for moving in this direction
    ///
    /// y grows downward, matching the LED matrix rows.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// A relative turn, as produced by the two steering buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    /// Signed rotation step: -1 for left, +1 for right
    pub fn delta(self) -> i8 {
        match self {
            Turn::Left => -1,
            Turn::Right => 1,
        }
    }
}
