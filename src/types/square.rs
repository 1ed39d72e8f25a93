use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use arrayvec::ArrayVec;
use crate::types::{Direction, File, Rank};

/// A square on the board, packed as `rank << 3 | file`. Only the 64 squares of
/// [`Square::ALL`] can be constructed, and every navigation method maps that
/// set onto itself.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {

    pub const COUNT: u8 = 64;

    /// Longest possible ray, corner to corner.
    pub const MAX_RAY: usize = 7;

    pub const ALL: [Square; Square::COUNT as usize] = {
        let mut squares = [Square(0); Square::COUNT as usize];
        let mut i = 0;
        while i < Square::COUNT as usize {
            squares[i] = Square(i as u8);
            i += 1;
        }
        squares
    };

    #[inline(always)]
    pub const fn from(file: File, rank: Rank) -> Square {
        Square((rank as u8) << 3 | (file as u8))
    }

    pub const fn from_index(idx: u8) -> Option<Square> {
        if idx < Square::COUNT {
            Some(Square(idx))
        } else {
            None
        }
    }

    /// Looks up the square by 1-based column and row.
    pub const fn at(column: u8, row: u8) -> Option<Square> {
        match (File::from_number(column), Rank::from_number(row)) {
            (Some(file), Some(rank)) => Some(Square::from(file, rank)),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn file(self) -> File {
        File::of(self)
    }

    #[inline(always)]
    pub const fn rank(self) -> Rank {
        Rank::of(self)
    }

    /// 1 for the a-file through 8 for the h-file.
    pub const fn column(self) -> u8 {
        self.file().number()
    }

    /// 1 for the first rank through 8 for the eighth.
    pub const fn row(self) -> u8 {
        self.rank().number()
    }

    #[inline(always)]
    pub const fn flip_rank(self) -> Square {
        Square(self.0 ^ 56)
    }

    #[inline(always)]
    pub const fn flip_file(self) -> Square {
        Square(self.0 ^ 7)
    }

    pub fn iter() -> impl Iterator<Item = Square> {
        Square::ALL.into_iter()
    }

    pub const fn is_first_column(self) -> bool {
        self.column() == 1
    }

    pub const fn non_first_column(self) -> bool {
        !self.is_first_column()
    }

    pub const fn is_last_column(self) -> bool {
        self.column() == 8
    }

    pub const fn non_last_column(self) -> bool {
        !self.is_last_column()
    }

    pub const fn is_first_row(self) -> bool {
        self.row() == 1
    }

    pub const fn non_first_row(self) -> bool {
        !self.is_first_row()
    }

    pub const fn is_last_row(self) -> bool {
        self.row() == 8
    }

    pub const fn non_last_row(self) -> bool {
        !self.is_last_row()
    }

    pub const fn is_edge(self) -> bool {
        self.is_first_column() || self.is_last_column() || self.is_first_row() || self.is_last_row()
    }

    pub fn next_column(self) -> Square {
        if self.is_last_column() {
            return self;
        }
        self.value_of(self.column() + 1, self.row())
    }

    pub fn previous_column(self) -> Square {
        if self.is_first_column() {
            return self;
        }
        self.value_of(self.column() - 1, self.row())
    }

    pub fn next_row(self) -> Square {
        if self.is_last_row() {
            return self;
        }
        self.value_of(self.column(), self.row() + 1)
    }

    pub fn previous_row(self) -> Square {
        if self.is_first_row() {
            return self;
        }
        self.value_of(self.column(), self.row() - 1)
    }

    pub fn diagonal_right_up(self) -> Square {
        self.diagonal(Square::next_column, Square::next_row)
    }

    pub fn diagonal_right_down(self) -> Square {
        self.diagonal(Square::next_column, Square::previous_row)
    }

    pub fn diagonal_left_up(self) -> Square {
        self.diagonal(Square::previous_column, Square::next_row)
    }

    pub fn diagonal_left_down(self) -> Square {
        self.diagonal(Square::previous_column, Square::previous_row)
    }

    /// Takes one step in the given direction, staying put at the edge of the
    /// board exactly like the named single-direction methods.
    pub fn step(self, dir: Direction) -> Square {
        match dir {
            Direction::Up => self.next_row(),
            Direction::Down => self.previous_row(),
            Direction::Right => self.next_column(),
            Direction::Left => self.previous_column(),
            Direction::RightUp => self.diagonal_right_up(),
            Direction::RightDown => self.diagonal_right_down(),
            Direction::LeftUp => self.diagonal_left_up(),
            Direction::LeftDown => self.diagonal_left_down(),
        }
    }

    /// Squares a slider on this square would pass over in the given direction,
    /// nearest first. Stops at the first step that is not a full move, so a
    /// diagonal ray does not run along the edge of the board.
    pub fn ray(self, dir: Direction) -> ArrayVec<Square, { Square::MAX_RAY }> {
        let mut squares = ArrayVec::new();
        let mut current = self;
        loop {
            let next = current.step(dir);
            if !current.is_full_step(next, dir) {
                break;
            }
            squares.push(next);
            current = next;
        }
        squares
    }

    /// The squares one full step away, in [`Direction::ALL`] order.
    pub fn neighbours(self) -> ArrayVec<Square, { Direction::COUNT }> {
        Direction::ALL.iter()
            .map(|&dir| (dir, self.step(dir)))
            .filter(|&(dir, sq)| self.is_full_step(sq, dir))
            .map(|(_, sq)| sq)
            .collect()
    }

    // A blocked column step leaves the square where it was; a blocked row step
    // keeps the column step that already happened.
    fn diagonal(self, column_step: fn(Square) -> Square, row_step: fn(Square) -> Square) -> Square {
        let stepped = column_step(self);
        if stepped == self {
            return self;
        }
        row_step(stepped)
    }

    fn is_full_step(self, to: Square, dir: Direction) -> bool {
        let (dc, dr) = dir.offset();
        to.column() as i8 - self.column() as i8 == dc && to.row() as i8 - self.row() as i8 == dr
    }

    fn value_of(self, column: u8, row: u8) -> Square {
        Square::at(column, row).unwrap_or(self)
    }

}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Square {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let mut chars = name.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => {
                let file = File::from_char(f)
                    .ok_or_else(|| format!("Invalid file '{}' in square '{}'", f, name))?;
                let rank = Rank::from_char(r)
                    .ok_or_else(|| format!("Invalid rank '{}' in square '{}'", r, name))?;
                Ok(Square::from(file, rank))
            }
            _ => Err(format!("Square must be a file followed by a rank, got '{}'", name)),
        }
    }
}

impl<T, const N: usize> Index<Square> for [T; N] {
    type Output = T;

    fn index(&self, sq: Square) -> &Self::Output {
        &self[sq.index()]
    }
}

impl<T, const N: usize> IndexMut<Square> for [T; N] {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self[sq.index()]
    }
}
