#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use types::*;

use types::array_size;

mod error;
mod generator;
mod text;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "BoardConfigRepr")]
pub struct BoardConfig {
    /// Board dimensions as `(rows, cols)`.
    pub size: Coord2,
    /// Probability in `[0, 1]` that any single light starts lit.
    pub chance_light_starts_on: f64,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, chance_light_starts_on: f64) -> Self {
        Self {
            size,
            chance_light_starts_on,
        }
    }

    pub fn new((rows, cols): Coord2, chance_light_starts_on: f64) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        let chance = if chance_light_starts_on.is_nan() {
            0.0
        } else {
            chance_light_starts_on.clamp(0.0, 1.0)
        };
        Self::new_unchecked((rows, cols), chance)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Wire form of [`BoardConfig`], clamped through [`BoardConfig::new`] on the way in.
#[derive(Deserialize)]
struct BoardConfigRepr {
    size: Coord2,
    chance_light_starts_on: f64,
}

impl From<BoardConfigRepr> for BoardConfig {
    fn from(repr: BoardConfigRepr) -> Self {
        Self::new(repr.size, repr.chance_light_starts_on)
    }
}

/// A full Lights Out board: one boolean per cell, `true` meaning lit.
///
/// Grids are treated as values, every move produces a new grid through [`LightGrid::toggle`]
/// and leaves the previous one intact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct LightGrid {
    lights: Array2<bool>,
}

impl LightGrid {
    pub fn unlit(size: Coord2) -> Self {
        Self::from_lights_unchecked(Array2::default(size.to_nd_index()))
    }

    pub fn from_lights(lights: Array2<bool>) -> Result<Self> {
        let (rows, cols) = lights.dim();
        let max = usize::from(Coord::MAX);
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self::from_lights_unchecked(lights))
    }

    pub(crate) fn from_lights_unchecked(lights: Array2<bool>) -> Self {
        Self { lights }
    }

    /// Builds a grid from row-major cell states, every row must have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != col_count) {
            return Err(GameError::InvalidBoardShape);
        }

        let lights = Array2::from_shape_fn((row_count, col_count), |(row, col)| {
            rows[row].as_ref()[col]
        });
        Self::from_lights(lights)
    }

    pub fn from_lit_coords(size: Coord2, lit_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::unlit(size);

        for &coords in lit_coords {
            let coords = grid.validate_coords(coords)?;
            grid.lights[coords.to_nd_index()] = true;
        }

        Ok(grid)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Board dimensions as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        array_size(&self.lights)
    }

    pub fn nrows(&self) -> Coord {
        self.size().0
    }

    pub fn ncols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn lights(&self) -> &Array2<bool> {
        &self.lights
    }

    /// Whether the cell at `coords` is lit, positions outside the board count as unlit.
    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.lights
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn lit_count(&self) -> CellCount {
        let count = self.lights.iter().filter(|&&lit| lit).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }

    /// True when every light is off.
    pub fn has_won(&self) -> bool {
        !self.lights.iter().any(|&lit| lit)
    }

    /// Positions flipped by a move at `coords`: the cell and its orthogonal neighbors, in bounds only.
    pub fn iter_cross(&self, coords: Coord2) -> CrossIter {
        self.lights.iter_cross(coords)
    }

    /// Returns the grid that results from pressing the light at `coords`.
    ///
    /// The pressed light and its up, down, left and right neighbors flip. Any of those positions that falls
    /// outside the board is skipped, so pressing outside the board is never an error, it only affects whichever
    /// neighbors happen to be in bounds.
    pub fn toggle(&self, coords: Coord2) -> Self {
        let mut next = self.clone();
        next.flip_cross(coords);
        log::trace!("toggle {:?}: {} lit", coords, next.lit_count());
        next
    }

    /// Like [`LightGrid::toggle`], also reporting whether the new grid is solved.
    pub fn toggle_with_outcome(&self, coords: Coord2) -> (Self, ToggleOutcome) {
        let next = self.toggle(coords);
        let outcome = if next.has_won() {
            ToggleOutcome::Won
        } else {
            ToggleOutcome::Toggled
        };
        (next, outcome)
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.lights.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    fn flip_cross(&mut self, coords: Coord2) {
        for pos in self.lights.iter_cross(coords) {
            let light = &mut self.lights[pos.to_nd_index()];
            *light = !*light;
        }
    }
}

impl TryFrom<Array2<bool>> for LightGrid {
    type Error = GameError;

    fn try_from(lights: Array2<bool>) -> Result<Self> {
        Self::from_lights(lights)
    }
}

impl From<LightGrid> for Array2<bool> {
    fn from(grid: LightGrid) -> Self {
        grid.lights
    }
}

/// Panics when `coords` is outside the board, use [`LightGrid::is_lit`] for a non-panicking lookup.
impl Index<Coord2> for LightGrid {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.lights[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Toggled,
    Won,
}

impl ToggleOutcome {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}
