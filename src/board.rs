//! Board access and the row-major cell numbering shared by adjacency and the solver.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::letter_id;
use crate::error::BoggleError;
use crate::{CellCoord, CellId, Result};

/// Anything that can be read as a rectangular grid of letters. Letters are expected to be 'A'-'Z',
/// with 'Q' standing for the "QU" die face; the solver rejects anything else.
pub trait Board {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn letter_at(&self, row: usize, col: usize) -> char;
}

/// The shape of a board, and the conversions between cell ids and (row, col) coords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Dimensions> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(BoggleError::InvalidDimensions { rows, cols });
        }
        Ok(Dimensions { rows, cols })
    }

    pub fn of<B: Board + ?Sized>(board: &B) -> Result<Dimensions> {
        Dimensions::new(board.rows(), board.cols())
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn cell_id(&self, (row, col): CellCoord) -> CellId {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub fn coord(&self, cell: CellId) -> CellCoord {
        debug_assert!(cell < self.cell_count());
        (cell / self.cols, cell % self.cols)
    }

    pub fn cells(&self) -> std::ops::Range<CellId> {
        0..self.cell_count()
    }

    /// Is this a single row or a single column?
    pub fn is_linear(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }
}

/// An owned board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBoard {
    dimensions: Dimensions,
    letters: Vec<char>,
}

impl GridBoard {
    /// Build a board from row-major letters. Every letter must be 'A'-'Z'.
    pub fn new(rows: usize, cols: usize, letters: Vec<char>) -> Result<GridBoard> {
        let dimensions = Dimensions::new(rows, cols)?;

        if letters.len() != dimensions.cell_count() {
            return Err(BoggleError::CellCountMismatch {
                expected: dimensions.cell_count(),
                found: letters.len(),
            });
        }

        if let Some(position) = letters.iter().position(|&letter| letter_id(letter).is_none()) {
            return Err(BoggleError::InvalidLetter { letter: letters[position], position });
        }

        Ok(GridBoard { dimensions, letters })
    }

    /// Build a board from one string per row, one character per cell.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<GridBoard> {
        if rows.is_empty() {
            return Err(BoggleError::MissingArgument("board rows"));
        }
        let cols = rows.first().map(|row| row.as_ref().chars().count()).unwrap_or(0);

        let mut letters = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.chars().count() != cols {
                return Err(BoggleError::MalformedBoard(format!(
                    "row {:?} has {} cells, expected {}",
                    row,
                    row.chars().count(),
                    cols
                )));
            }
            letters.extend(row.chars());
        }

        GridBoard::new(rows.len(), cols, letters)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl Board for GridBoard {
    fn rows(&self) -> usize {
        self.dimensions.rows
    }

    fn cols(&self) -> usize {
        self.dimensions.cols
    }

    fn letter_at(&self, row: usize, col: usize) -> char {
        self.letters[self.dimensions.cell_id((row, col))]
    }
}

/// Parse one cell token of a board file: a single letter, or "Qu" for the Q die face.
fn parse_cell_token(token: &str, position: usize) -> Result<char> {
    let upper = token.to_ascii_uppercase();
    let mut chars = upper.chars();

    match (chars.next(), chars.next(), chars.next()) {
        (Some('Q'), Some('U'), None) => Ok('Q'),
        (Some(letter), None, None) => {
            if letter_id(letter).is_some() {
                Ok(letter)
            } else {
                Err(BoggleError::InvalidLetter { letter, position })
            }
        }
        _ => Err(BoggleError::MalformedBoard(format!("bad cell {:?} at position {}", token, position))),
    }
}

/// Parses the board file format: a "rows cols" header followed by rows * cols whitespace-separated
/// cells in row-major order.
impl FromStr for GridBoard {
    type Err = BoggleError;

    fn from_str(s: &str) -> Result<GridBoard> {
        let mut tokens = s.split_whitespace();

        let mut header = |name: &str| -> Result<usize> {
            let token = tokens.next().ok_or(BoggleError::MissingArgument("board header"))?;
            token.parse().map_err(|_| {
                BoggleError::MalformedBoard(format!("bad {} count {:?}", name, token))
            })
        };
        let rows = header("row")?;
        let cols = header("column")?;
        let dimensions = Dimensions::new(rows, cols)?;

        let letters = tokens
            .enumerate()
            .map(|(position, token)| parse_cell_token(token, position))
            .collect::<Result<Vec<char>>>()?;

        GridBoard::new(dimensions.rows, dimensions.cols, letters)
    }
}

impl fmt::Display for GridBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.dimensions.rows, self.dimensions.cols)?;
        for row in self.letters.chunks(self.dimensions.cols) {
            let cells: Vec<String> = row.iter().map(|&letter| {
                if letter == 'Q' { "Qu".to_string() } else { letter.to_string() }
            }).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_cell_coord_conversions() {
        let dims = Dimensions::new(3, 4).unwrap();

        assert_eq!(dims.cell_count(), 12);
        assert_eq!(dims.cell_id((0, 0)), 0);
        assert_eq!(dims.cell_id((1, 2)), 6);
        assert_eq!(dims.coord(11), (2, 3));

        for cell in dims.cells() {
            assert_eq!(dims.cell_id(dims.coord(cell)), cell);
        }
    }

    #[test]
    fn test_dimensions_must_be_positive() {
        assert_eq!(Dimensions::new(0, 3), Err(BoggleError::InvalidDimensions { rows: 0, cols: 3 }));
        assert!(Dimensions::new(3, 0).is_err());
        assert!(Dimensions::new(1, 5).unwrap().is_linear());
        assert!(!Dimensions::new(2, 5).unwrap().is_linear());
    }

    #[test]
    fn test_dimensions_cell_count_must_fit() {
        assert_eq!(
            Dimensions::new(usize::MAX, 2),
            Err(BoggleError::InvalidDimensions { rows: usize::MAX, cols: 2 })
        );
        assert!(Dimensions::new(usize::MAX, 1).is_ok());
    }

    #[test]
    fn test_from_rows() {
        let board = GridBoard::from_rows(&["QIX", "ETY"]).unwrap();

        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.letter_at(0, 0), 'Q');
        assert_eq!(board.letter_at(1, 2), 'Y');

        assert!(matches!(GridBoard::from_rows(&["AB", "C"]), Err(BoggleError::MalformedBoard(_))));
        assert_eq!(
            GridBoard::from_rows(&["AB", "cD"]),
            Err(BoggleError::InvalidLetter { letter: 'c', position: 2 })
        );

        let missing = GridBoard::from_rows::<&str>(&[]).unwrap_err();
        assert_eq!(missing, BoggleError::MissingArgument("board rows"));
        assert_eq!(missing.kind(), "".parse::<GridBoard>().unwrap_err().kind());
    }

    #[test]
    fn test_new_checks_cell_count() {
        assert_eq!(
            GridBoard::new(2, 2, vec!['A', 'B', 'C']),
            Err(BoggleError::CellCountMismatch { expected: 4, found: 3 })
        );
    }

    #[test]
    fn test_parse_board_file() {
        let text = "4 4\nA T E E\nA P Y O\nT I N U\nE D S Qu\n";
        let board: GridBoard = text.parse().unwrap();

        assert_eq!(board.dimensions(), Dimensions::new(4, 4).unwrap());
        assert_eq!(board.letter_at(0, 1), 'T');
        assert_eq!(board.letter_at(3, 3), 'Q');
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let board: GridBoard = "1 3\nqu a t".parse().unwrap();
        assert_eq!(board.letters(), &['Q', 'A', 'T']);
    }

    #[test]
    fn test_parse_errors() {
        let missing = "".parse::<GridBoard>().unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::IllegalArgument);

        assert!(matches!("x 2\nA B".parse::<GridBoard>(), Err(BoggleError::MalformedBoard(_))));
        assert!(matches!("0 2".parse::<GridBoard>(), Err(BoggleError::InvalidDimensions { .. })));
        assert!(matches!(
            "2 2\nA B C".parse::<GridBoard>(),
            Err(BoggleError::CellCountMismatch { expected: 4, found: 3 })
        ));
        assert!(matches!("1 2\nA BC".parse::<GridBoard>(), Err(BoggleError::MalformedBoard(_))));
        assert_eq!(
            "1 2\nA 1".parse::<GridBoard>(),
            Err(BoggleError::InvalidLetter { letter: '1', position: 1 })
        );
    }
}
