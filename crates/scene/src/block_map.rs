//! Grid of wall and block cells for the block world.
//!
//! Rows run along Z, columns along X. Cell `(x, z)` sits at world
//! `(x - 16, y, z - 16)` on the default 32x32 map.

use std::fmt::Write;

/// The map the world starts from: an outer wall ring and a dirt maze.
pub const DEFAULT_ROWS: [&str; 32] = [
    "11111111111111111111111111111111",
    "10000000000000000000002002000001",
    "10000000000000000000002002000001",
    "10000000000000000000002002000001",
    "10000000000000000000002002000001",
    "10000000000000222222222002000001",
    "10000000000000200000000002000001",
    "10000000000000200000000002000001",
    "10000000000000200222222222000001",
    "10000000000000200200000000000001",
    "10000000000000200200000000000001",
    "10000000000000200200000000000001",
    "10000000000000200200000000000001",
    "12222220000000200200000000000001",
    "10000020000000200200000000000001",
    "10000020222222200200000000000001",
    "10000020200000000200000000000001",
    "12200020200000000200000000000001",
    "10200020200000000200000000000001",
    "10200020200000000200000000000001",
    "10200022200222222200000000000001",
    "10200000000000200000000000000001",
    "10200000000000200000000000000001",
    "10222222222200200000000000000001",
    "10000000000200200000000000000001",
    "10000000000200222200000000000001",
    "10000000000200000200000000000001",
    "10000000000200000200000000000001",
    "10000000000222200200000000000001",
    "10000000000000200200000000000001",
    "10000000000000200200000000000001",
    "11111111111111111111111111111111",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// Half-height boundary wall.
    Wall,
    /// Full-height placeable block.
    Block,
}

impl Cell {
    pub fn digit(&self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Wall => '1',
            Cell::Block => '2',
        }
    }

    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::Wall),
            '2' => Some(Cell::Block),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, found: usize, expected: usize },
    #[error("invalid cell '{ch}' at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMap {
    width: usize,
    depth: usize,
    cells: Vec<Cell>,
}

impl Default for BlockMap {
    fn default() -> Self {
        Self::parse(&DEFAULT_ROWS.join("\n")).unwrap_or_else(|_| Self::empty(32, 32))
    }
}

impl BlockMap {
    pub fn empty(width: usize, depth: usize) -> Self {
        Self {
            width,
            depth,
            cells: vec![Cell::Empty; width * depth],
        }
    }

    /// Parse rows of `0`/`1`/`2` digits. Blank lines and surrounding
    /// whitespace are ignored.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = rows.first().map(|r| r.chars().count()).ok_or(MapError::Empty)?;
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::Ragged { row, found, expected: width });
            }
            for (col, ch) in line.chars().enumerate() {
                cells.push(Cell::from_digit(ch).ok_or(MapError::InvalidCell { row, col, ch })?);
            }
        }
        Ok(Self {
            width,
            depth: rows.len(),
            cells,
        })
    }

    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.depth);
        for z in 0..self.depth {
            for x in 0..self.width {
                out.push(self.cells[z * self.width + x].digit());
            }
            let _ = writeln!(out);
        }
        out
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn get(&self, x: usize, z: usize) -> Option<Cell> {
        (x < self.width && z < self.depth).then(|| self.cells[z * self.width + x])
    }

    /// Set a cell. Returns false, leaving the map untouched, when out of range.
    pub fn set(&mut self, x: usize, z: usize, cell: Cell) -> bool {
        if x >= self.width || z >= self.depth {
            return false;
        }
        self.cells[z * self.width + x] = cell;
        true
    }

    /// Cell under a world-space point, found by rounding `(x + 16, z + 16)`.
    /// Halves round toward positive infinity.
    pub fn cell_at_world(&self, x: f32, z: f32) -> Option<(usize, usize)> {
        let cx = (x + 16.5).floor();
        let cz = (z + 16.5).floor();
        if cx < 0.0 || cz < 0.0 {
            return None;
        }
        let (cx, cz) = (cx as usize, cz as usize);
        (cx < self.width && cz < self.depth).then_some((cx, cz))
    }

    /// Non-empty cells as `(x, z, cell)`, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, &cell)| {
            (cell != Cell::Empty).then(|| (i % self.width, i / self.width, cell))
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_is_walled() {
        let map = BlockMap::default();
        assert_eq!((map.width(), map.depth()), (32, 32));
        for i in 0..32 {
            assert_eq!(map.get(i, 0), Some(Cell::Wall));
            assert_eq!(map.get(i, 31), Some(Cell::Wall));
            assert_eq!(map.get(0, i), Some(Cell::Wall));
            assert_eq!(map.get(31, i), Some(Cell::Wall));
        }
        assert_eq!(map.get(22, 1), Some(Cell::Block));
        assert_eq!(map.get(1, 1), Some(Cell::Empty));
        assert_eq!(map.count(Cell::Wall), 124);
    }

    #[test]
    fn ascii_round_trip() {
        let map = BlockMap::default();
        let text = map.to_ascii();
        assert_eq!(text.lines().next(), Some(DEFAULT_ROWS[0]));
        assert_eq!(BlockMap::parse(&text), Ok(map));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(BlockMap::parse("\n  \n"), Err(MapError::Empty));
        assert_eq!(
            BlockMap::parse("012\n01"),
            Err(MapError::Ragged { row: 1, found: 2, expected: 3 })
        );
        assert_eq!(
            BlockMap::parse("010\n0x0"),
            Err(MapError::InvalidCell { row: 1, col: 1, ch: 'x' })
        );
    }

    #[test]
    fn set_respects_bounds() {
        let mut map = BlockMap::empty(4, 3);
        assert!(map.set(3, 2, Cell::Block));
        assert_eq!(map.get(3, 2), Some(Cell::Block));
        assert!(!map.set(4, 0, Cell::Block));
        assert!(!map.set(0, 3, Cell::Block));
        assert_eq!(map.get(4, 0), None);
    }

    #[test]
    fn world_point_rounds_to_cell() {
        let map = BlockMap::default();
        assert_eq!(map.cell_at_world(0.0, 0.0), Some((16, 16)));
        assert_eq!(map.cell_at_world(-15.6, 14.4), Some((0, 30)));
        assert_eq!(map.cell_at_world(-16.6, 0.0), None);
        assert_eq!(map.cell_at_world(0.0, 15.6), None);
    }

    #[test]
    fn world_point_halves_round_up() {
        let map = BlockMap::default();
        // 33 half-unit steps left of the origin land exactly on the edge.
        assert_eq!(map.cell_at_world(-16.5, 0.0), Some((0, 16)));
        assert_eq!(map.cell_at_world(0.0, -16.5), Some((16, 0)));
        assert_eq!(map.cell_at_world(-0.5, 2.5), Some((16, 19)));
        assert_eq!(map.cell_at_world(15.5, 0.0), None);
    }

    #[test]
    fn occupied_lists_non_empty_cells() {
        let map = BlockMap::parse("010\n200").unwrap();
        let cells: Vec<_> = map.occupied().collect();
        assert_eq!(cells, vec![(1, 0, Cell::Wall), (0, 1, Cell::Block)]);
    }
}
