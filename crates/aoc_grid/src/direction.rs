use strum::{Display, EnumCount, EnumIter};

/// One of the 8 compass directions from a cell to its neighbors.
///
/// Rows grow downward, so [`Direction::N`] has a negative `y` offset.
#[derive(Display, EnumIter, EnumCount, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up
    N,
    /// Up and right
    NE,
    /// Right
    E,
    /// Down and right
    SE,
    /// Down
    S,
    /// Down and left
    SW,
    /// Left
    W,
    /// Up and left
    NW,
}

impl Direction {
    /// Returns the unit offset `(dx, dy)` of the direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::N => (0, -1),
            Direction::NE => (1, -1),
            Direction::E => (1, 0),
            Direction::SE => (1, 1),
            Direction::S => (0, 1),
            Direction::SW => (-1, 1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, -1),
        }
    }

    /// Returns the direction pointing the opposite way.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }
}

/// Diagonal neighbor of a cell, used as a corner of an X shape.
#[derive(Display, EnumIter, EnumCount, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Up and left
    UpLeft,
    /// Up and right
    UpRight,
    /// Down and left
    DownLeft,
    /// Down and right
    DownRight,
}

impl Corner {
    /// Returns the direction from the center to the corner.
    pub const fn direction(self) -> Direction {
        match self {
            Corner::UpLeft => Direction::NW,
            Corner::UpRight => Direction::NE,
            Corner::DownLeft => Direction::SW,
            Corner::DownRight => Direction::SE,
        }
    }

    /// Returns the corner at the other end of the same diagonal.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Corner::UpLeft => Corner::DownRight,
            Corner::UpRight => Corner::DownLeft,
            Corner::DownLeft => Corner::UpRight,
            Corner::DownRight => Corner::UpLeft,
        }
    }
}
