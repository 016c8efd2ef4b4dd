use ndarray::Array2;

/// Row or column index, and the length of either board axis.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Shape of an array in board coordinates, saturating on axes longer than [`Coord::MAX`].
pub(crate) fn array_size<T>(array: &Array2<T>) -> Coord2 {
    let (rows, cols) = array.dim();
    (
        Coord::try_from(rows).unwrap_or(Coord::MAX),
        Coord::try_from(cols).unwrap_or(Coord::MAX),
    )
}

pub trait CrossIterExt {
    fn iter_cross(&self, index: Coord2) -> CrossIter;
}

impl<T> CrossIterExt for Array2<T> {
    fn iter_cross(&self, index: Coord2) -> CrossIter {
        CrossIter::new(index, array_size(self))
    }
}

/// Offsets making up a press: the cell itself, then down, up, right and left.
const CROSS: [(i8, i8); 5] = [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)];

/// Moves one axis by `delta`, staying within `0..len`.
fn step_axis(pos: Coord, delta: i8, len: Coord) -> Option<Coord> {
    pos.checked_add_signed(delta).filter(|&next| next < len)
}

/// Iterates the in-bounds positions of the plus-shaped region centered on a cell.
///
/// The center does not need to be in bounds itself, only the yielded positions are.
#[derive(Debug)]
pub struct CrossIter {
    center: Coord2,
    bounds: Coord2,
    offsets: core::slice::Iter<'static, (i8, i8)>,
}

impl CrossIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offsets: CROSS.iter(),
        }
    }
}

impl Iterator for CrossIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, col) = self.center;
        let (rows, cols) = self.bounds;
        self.offsets.find_map(|&(d_row, d_col)| {
            Some((
                step_axis(row, d_row, rows)?,
                step_axis(col, d_col, cols)?,
            ))
        })
    }
}
