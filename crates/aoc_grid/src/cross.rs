use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::{Corner, Grid, Pos};

/// Arrangement of the two end letters around the center of an X.
///
/// Each variant names the side of the X where both diagonals start. For
/// `MAS`, [`CrossVariant::StartLeft`] is:
///
/// ```text
/// M.S
/// .A.
/// M.S
/// ```
#[derive(Display, EnumIter, EnumCount, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CrossVariant {
    /// Both diagonals start on the left.
    StartLeft,
    /// Both diagonals start at the top.
    StartTop,
    /// Both diagonals start on the right.
    StartRight,
    /// Both diagonals start at the bottom.
    StartBottom,
}

impl CrossVariant {
    /// Returns the two corners holding the first letter of the arms.
    pub const fn start_corners(self) -> [Corner; 2] {
        match self {
            CrossVariant::StartLeft => [Corner::UpLeft, Corner::DownLeft],
            CrossVariant::StartTop => [Corner::UpLeft, Corner::UpRight],
            CrossVariant::StartRight => [Corner::UpRight, Corner::DownRight],
            CrossVariant::StartBottom => [Corner::DownLeft, Corner::DownRight],
        }
    }

    /// Returns whether `corner` holds the first letter of an arm.
    pub fn is_start(self, corner: Corner) -> bool {
        self.start_corners().contains(&corner)
    }
}

/// Two 3-letter words crossing diagonally at their middle letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CrossPattern {
    /// Letter shared by both arms.
    pub center: char,
    /// First letter of each arm.
    pub start: char,
    /// Last letter of each arm.
    pub end: char,
}

impl CrossPattern {
    /// Two `MAS` arms, each of which may be read forward or backward.
    pub const X_MAS: Self = Self {
        center: 'A',
        start: 'M',
        end: 'S',
    };

    /// Returns the letter expected at `corner` for `variant`.
    pub fn letter(&self, variant: CrossVariant, corner: Corner) -> char {
        match variant.is_start(corner) {
            true => self.start,
            false => self.end,
        }
    }

    /// Returns the variant whose letters surround `anchor`, or `None` if no
    /// variant matches or a corner lies outside the grid.
    ///
    /// `anchor` is assumed to be the center; its own letter is not checked.
    pub fn matching_variant(&self, grid: &Grid, anchor: Pos) -> Option<CrossVariant> {
        let mut corners = [' '; Corner::COUNT];
        for (slot, corner) in corners.iter_mut().zip(Corner::iter()) {
            *slot = grid.get(anchor.step(corner.direction()))?;
        }
        CrossVariant::iter().find(|&variant| {
            Corner::iter()
                .zip(corners)
                .all(|(corner, c)| c == self.letter(variant, corner))
        })
    }

    /// Returns whether one of the 4 variants surrounds `anchor`.
    pub fn matches_at(&self, grid: &Grid, anchor: Pos) -> bool {
        self.matching_variant(grid, anchor).is_some()
    }

    /// Returns the number of cells holding the center letter that are
    /// surrounded by a matching variant.
    pub fn count(&self, grid: &Grid) -> usize {
        let total = grid
            .anchors(self.center)
            .filter(|&anchor| self.matches_at(grid, anchor))
            .count();
        log::debug!("found {total} crosses centered on {:?}", self.center);
        total
    }
}
