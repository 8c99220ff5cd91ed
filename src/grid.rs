use crate::color::COLOR_HEX_LENGTH;
use crate::digest::read_hex_byte;
use crate::errors::IdenticonError;

/// Square grid of cells, each row is a palindrome
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Populates the grid from the digest bytes that follow the color bytes.
    /// A cell is on when its byte is odd.
    pub fn build(digest: &str, size: usize) -> Result<Self, IdenticonError> {
        let mut cells = vec![false; size * size];
        let mut offset = COLOR_HEX_LENGTH;
        for row in 0..size {
            for column in 0..=size / 2 {
                let byte = read_hex_byte(digest, offset)?;
                let is_on = byte % 2 == 1;
                cells[row * size + column] = is_on;
                cells[row * size + size - column - 1] = is_on;
                offset += 2;
            };
        };
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `None` if the cell is outside of the grid
    pub fn is_on(&self, row: usize, column: usize) -> Option<bool> {
        if row >= self.size || column >= self.size {
            return None;
        };
        self.cells.get(row * self.size + column).copied()
    }

    pub fn is_mirrored(&self) -> bool {
        self.cells.chunks(self.size.max(1))
            .all(|row| row.iter().eq(row.iter().rev()))
    }
}

/// Number of hex characters required to build a grid of the given size
pub fn required_digest_length(size: usize) -> usize {
    COLOR_HEX_LENGTH + 2 * size * (size / 2 + 1)
}

#[cfg(test)]
mod tests {
    use sha2::Sha512;
    use crate::digest::hex_digest;
    use super::*;

    #[test]
    fn test_required_digest_length() {
        assert_eq!(required_digest_length(1), 8);
        assert_eq!(required_digest_length(4), 30);
        assert_eq!(required_digest_length(10), 126);
    }

    #[test]
    fn test_build_grid() {
        // Color bytes, then one byte per row for a 1x1 grid
        let grid = Grid::build("00000001", 1).unwrap();
        assert_eq!(grid.is_on(0, 0), Some(true));
        let grid = Grid::build("000000fe", 1).unwrap();
        assert_eq!(grid.is_on(0, 0), Some(false));
    }

    #[test]
    fn test_build_grid_odd_size() {
        // 3x3 grid uses 2 bytes per row, middle column mirrors onto itself
        let digest = ["ffffff", "0100", "0001", "0303"].concat();
        let grid = Grid::build(&digest, 3).unwrap();
        let rows: Vec<Vec<bool>> = (0..3)
            .map(|row| (0..3).map(|column| grid.is_on(row, column).unwrap()).collect())
            .collect();
        assert_eq!(rows, vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, true, true],
        ]);
        assert!(grid.is_mirrored());
    }

    #[test]
    fn test_build_grid_even_size() {
        // 2x2 grid uses 2 bytes per row, the second one overwrites the first
        let digest = ["ffffff", "0100", "0001"].concat();
        let grid = Grid::build(&digest, 2).unwrap();
        assert_eq!(grid.is_on(0, 0), Some(false));
        assert_eq!(grid.is_on(0, 1), Some(false));
        assert_eq!(grid.is_on(1, 0), Some(true));
        assert_eq!(grid.is_on(1, 1), Some(true));
    }

    #[test]
    fn test_is_on_outside_of_grid() {
        // Row 0 is off, row 1 is on
        let digest = ["ffffff", "0000", "0101"].concat();
        let grid = Grid::build(&digest, 2).unwrap();
        assert_eq!(grid.is_on(0, 2), None);
        assert_eq!(grid.is_on(2, 0), None);
        assert_eq!(grid.is_on(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn test_build_grid_from_sha512_digest() {
        let digest = hex_digest::<Sha512>("177de69e-aca8-47cd-9643-5cf97727b781");
        for size in 1..=10 {
            let grid = Grid::build(&digest, size).unwrap();
            assert_eq!(grid.size(), size);
            assert!(grid.is_mirrored());
        };
    }

    #[test]
    fn test_build_grid_digest_too_short() {
        let error = Grid::build("000000010", 2).err().unwrap();
        assert!(matches!(error, IdenticonError::InvalidInput(_)));
        let digest = "0".repeat(required_digest_length(10) - 1);
        assert!(Grid::build(&digest, 10).is_err());
        let digest = "0".repeat(required_digest_length(10));
        assert!(Grid::build(&digest, 10).is_ok());
    }

    #[test]
    fn test_build_grid_invalid_hex() {
        let error = Grid::build("000000xx", 1).err().unwrap();
        assert!(matches!(error, IdenticonError::InvalidInput(_)));
    }
}
