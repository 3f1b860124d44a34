use std::fmt;

use crate::Direction;

/// Position of a cell in a [`Grid`].
///
/// `x` is the column and `y` is the row, both counted from the top-left
/// corner. Positions may lie outside the grid; lookups at such positions
/// return `None`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Column.
    pub x: isize,
    /// Row.
    pub y: isize,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y } = self;
        write!(f, "({x}, {y})")
    }
}

impl From<(isize, isize)> for Pos {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl Pos {
    /// Constructs a position from a column and row.
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Returns the position offset by `(dx, dy)`.
    ///
    /// Coordinates saturate at the limits of `isize`, so the result of
    /// stepping off a far-away position is still outside every grid.
    #[must_use]
    pub const fn offset(self, dx: isize, dy: isize) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Returns the neighboring position in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        self.offset(dx, dy)
    }
}

/// Immutable two-dimensional grid of characters.
///
/// Cells are stored row-major with the width and height tracked explicitly.
/// A cell is absent if it lies outside `width * height` or past the end of a
/// row that was shorter than the longest row.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
    rectangular: bool,
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row.iter().flatten() {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid {
    /// Builds a grid from text, one row per line.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Builds a grid from rows of text.
    ///
    /// The character at row `i`, column `j` is stored at position `(j, i)`.
    /// Trailing line terminators (`\n` and `\r`) are stripped from each row
    /// before indexing. Rows of differing lengths are accepted; the grid is as
    /// wide as its longest row.
    pub fn from_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Self {
        let rows: Vec<Vec<char>> = lines
            .into_iter()
            .map(|line| line.as_ref().trim_end_matches(['\n', '\r']).chars().collect())
            .collect();

        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let rectangular = rows.iter().all(|row| row.len() == width);

        let mut cells = Vec::with_capacity(width * height);
        for row in &rows {
            cells.extend(row.iter().copied().map(Some));
            cells.extend(std::iter::repeat_n(None, width - row.len()));
        }

        if !rectangular {
            log::debug!("built ragged {width}x{height} grid");
        }

        Self {
            width,
            height,
            cells,
            rectangular,
        }
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Returns whether every row had the same length.
    pub fn is_rectangular(&self) -> bool {
        self.rectangular
    }

    /// Returns whether `pos` lies within the bounds of the grid.
    ///
    /// A position within bounds may still be absent in a ragged grid.
    pub fn in_bounds(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    /// Returns the character at `pos`, or `None` if there is no cell there.
    pub fn get(&self, pos: Pos) -> Option<char> {
        self.cells[self.index(pos)?]
    }

    /// Returns whether the cell at `pos` holds `c`.
    pub fn is(&self, pos: Pos, c: char) -> bool {
        self.get(pos) == Some(c)
    }

    /// Iterates over all present cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, char)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &cell)| {
            let pos = Pos::new((i % self.width) as isize, (i / self.width) as isize);
            Some((pos, cell?))
        })
    }

    /// Iterates over the positions of every cell holding `c`.
    pub fn anchors(&self, c: char) -> impl Iterator<Item = Pos> + '_ {
        self.iter()
            .filter(move |&(_, cell)| cell == c)
            .map(|(pos, _)| pos)
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}
