//! Plain-text board notation, one line per row with `#` for a lit cell and `.` for an unlit one.

use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::str::FromStr;

use crate::*;

const LIT: char = '#';
const UNLIT: char = '.';

impl fmt::Display for LightGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.lights().rows().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &lit in row {
                f.write_char(if lit { LIT } else { UNLIT })?;
            }
        }
        Ok(())
    }
}

impl FromStr for LightGrid {
    type Err = GameError;

    /// Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        LIT => Ok(true),
                        UNLIT => Ok(false),
                        other => Err(GameError::InvalidCell(other)),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parses_and_formats() {
        let grid: LightGrid = "
            .#.
            ###
            .#.
        "
        .parse()
        .unwrap();

        assert_eq!(grid, LightGrid::unlit((3, 3)).toggle((1, 1)));
        assert_eq!(grid.to_string(), ".#.\n###\n.#.");
    }

    #[test]
    fn rejects_unknown_cells() {
        assert_eq!(
            "#.\n.o".parse::<LightGrid>(),
            Err(GameError::InvalidCell('o'))
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            "##\n#".parse::<LightGrid>(),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!("".parse::<LightGrid>(), Err(GameError::InvalidBoardShape));
    }
}
