use crate::types::square::Square;
use std::fmt;

#[derive(PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Rank {
    One, Two, Three, Four, Five, Six, Seven, Eight
}

impl Rank {

    pub const COUNT: usize = 8;

    pub const CHARS: [char; Rank::COUNT] = ['1', '2', '3', '4', '5', '6', '7', '8'];

    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::One, Rank::Two, Rank::Three, Rank::Four,
        Rank::Five, Rank::Six, Rank::Seven, Rank::Eight
    ];

    pub const fn from_index(idx: u8) -> Option<Rank> {
        match idx {
            0 => Some(Rank::One),
            1 => Some(Rank::Two),
            2 => Some(Rank::Three),
            3 => Some(Rank::Four),
            4 => Some(Rank::Five),
            5 => Some(Rank::Six),
            6 => Some(Rank::Seven),
            7 => Some(Rank::Eight),
            _ => None,
        }
    }

    /// Row number as counted from white's side, starting at 1.
    pub const fn from_number(row: u8) -> Option<Rank> {
        if row == 0 {
            None
        } else {
            Rank::from_index(row - 1)
        }
    }

    pub const fn of(sq: Square) -> Rank {
        match sq.index() >> 3 {
            0 => Rank::One,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            _ => unreachable!(),
        }
    }

    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn next(self) -> Option<Rank> {
        Rank::from_index(self as u8 + 1)
    }

    pub const fn previous(self) -> Option<Rank> {
        match self {
            Rank::One => None,
            _ => Rank::from_index(self as u8 - 1),
        }
    }

    pub const fn to_char(self) -> char {
        Rank::CHARS[self as usize]
    }

    pub const fn from_char(c: char) -> Option<Rank> {
        match c {
            '1' => Some(Rank::One),
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            _ => None,
        }
    }

}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
