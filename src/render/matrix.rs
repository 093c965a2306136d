use crate::game::Cell;
use crate::game::config::{GRID_HEIGHT, GRID_WIDTH};

/// Full-brightness level
pub const MAX_BRIGHTNESS: u8 = 255;

/// Built-in 5x5 images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Skull,
    Happy,
}

impl Icon {
    /// Rows top to bottom, `#` for a lit LED
    pub fn rows(self) -> [&'static str; GRID_HEIGHT] {
        match self {
            Icon::Skull => [".###.", "#.#.#", "#####", ".###.", ".###."],
            Icon::Happy => [".....", ".#.#.", ".....", "#...#", ".###."],
        }
    }
}

/// Brightness of every LED, row-major
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedMatrix {
    levels: [[u8; GRID_WIDTH]; GRID_HEIGHT],
}

impl LedMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.levels = [[0; GRID_WIDTH]; GRID_HEIGHT];
    }

    pub fn set(&mut self, cell: Cell, level: u8) {
        self.levels[cell.y() as usize][cell.x() as usize] = level;
    }

    #[cfg(test)]
    pub fn get(&self, cell: Cell) -> u8 {
        self.levels[cell.y() as usize][cell.x() as usize]
    }

    /// Replace the whole image with an icon at full brightness
    pub fn load_icon(&mut self, icon: Icon) {
        for (y, row) in icon.rows().iter().enumerate() {
            for (x, led) in row.bytes().enumerate() {
                self.levels[y][x] = if led == b'#' { MAX_BRIGHTNESS } else { 0 };
            }
        }
    }

    pub fn rows(&self) -> &[[u8; GRID_WIDTH]; GRID_HEIGHT] {
        &self.levels
    }

    #[cfg(test)]
    pub fn is_dark(&self) -> bool {
        self.levels.iter().flatten().all(|&level| level == 0)
    }
}
