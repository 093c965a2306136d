use super::action::{Direction, Turn};
use super::config::{GRID_CELLS, GRID_HEIGHT, GRID_WIDTH, INITIAL_SNAKE, INITIAL_TICK_MS};
use std::fmt;
use std::time::Duration;

/// A cell of the LED matrix
///
/// Only constructible inside the grid, so a stored cell is always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    /// Returns `None` when (x, y) lies outside the grid
    pub fn new(x: i32, y: i32) -> Option<Self> {
        if (0..GRID_WIDTH as i32).contains(&x) && (0..GRID_HEIGHT as i32).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Neighbouring cell in a direction, or `None` past the wall
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Self::new(self.x as i32 + dx, self.y as i32 + dy)
    }

    /// All cells in row-major order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_HEIGHT as u8).flat_map(|y| (0..GRID_WIDTH as u8).map(move |x| Cell { x, y }))
    }
}

/// The snake, head first, in storage sized for the whole grid
#[derive(Clone)]
pub struct Snake {
    cells: [Cell; GRID_CELLS],
    len: usize,
}

impl PartialEq for Snake {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Snake {}

impl fmt::Debug for Snake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Snake {
    /// The starting body: three cells in the middle row, heading right
    pub fn initial() -> Self {
        let mut snake = Self {
            cells: [Cell::ORIGIN; GRID_CELLS],
            len: 0,
        };
        for (x, y) in INITIAL_SNAKE {
            if let Some(cell) = Cell::new(x, y) {
                snake.push_back(cell);
            }
        }
        snake
    }

    /// Build a snake from cells, head first
    ///
    /// Returns `None` for an empty list or when a cell repeats.
    pub fn from_cells(cells: &[Cell]) -> Option<Self> {
        if cells.is_empty() || cells.len() > GRID_CELLS {
            return None;
        }
        let mut snake = Self {
            cells: [Cell::ORIGIN; GRID_CELLS],
            len: 0,
        };
        for &cell in cells {
            if snake.contains(cell) {
                return None;
            }
            snake.push_back(cell);
        }
        Some(snake)
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    /// Segments behind the head
    pub fn body_segments(&self) -> &[Cell] {
        &self.cells[1..self.len]
    }

    /// Whether any segment, head and tail included, occupies `cell`
    pub fn contains(&self, cell: Cell) -> bool {
        self.as_slice().contains(&cell)
    }

    pub fn as_slice(&self) -> &[Cell] {
        &self.cells[..self.len]
    }

    /// Make `cell` the new head
    ///
    /// Callers check that `cell` is free first. Distinct cells on a 25-cell
    /// grid can never exceed the capacity.
    pub fn push_front(&mut self, cell: Cell) {
        debug_assert!(self.len < GRID_CELLS, "snake exceeds grid area");
        debug_assert!(!self.contains(cell), "snake overlaps itself");
        self.cells.copy_within(0..self.len, 1);
        self.cells[0] = cell;
        self.len += 1;
    }

    /// Remove and return the tail segment
    pub fn pop_back(&mut self) -> Option<Cell> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.cells[self.len])
    }

    fn push_back(&mut self, cell: Cell) {
        self.cells[self.len] = cell;
        self.len += 1;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the snake is empty (never true for a constructed snake)
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Type of collision that ended a life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake ran off the matrix
    Wall,
    /// Snake ran into one of its own segments
    SelfCollision,
}

/// Complete game state for one life
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub direction: Direction,
    pub alive: bool,
    /// Set once the win sequence has been triggered for this life
    pub won: bool,
    /// Length increases not yet applied by keeping the tail
    pub growth_pending: u8,
    pub tick_interval_ms: u32,
    /// Drives the food's brightness pulse; no gameplay effect
    pub blink_phase: bool,
}

impl GameState {
    /// Fresh in-play state with the initial snake and the given food
    pub fn new(food: Cell) -> Self {
        Self {
            snake: Snake::initial(),
            food,
            direction: Direction::Right,
            alive: true,
            won: false,
            growth_pending: 0,
            tick_interval_ms: INITIAL_TICK_MS,
            blink_phase: false,
        }
    }

    /// Rotate the heading; only the accumulated heading at the next step counts
    pub fn turn(&mut self, turn: Turn) {
        self.direction = self.direction.rotated(turn);
    }

    /// Time until the next step
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_interval_ms))
    }
}
