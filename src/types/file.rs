use crate::types::square::Square;
use std::fmt;

#[derive(PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum File {
    A, B, C, D, E, F, G, H
}

impl File {

    pub const COUNT: usize = 8;

    pub const CHARS: [char; File::COUNT] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

    pub const ALL: [File; File::COUNT] = [
        File::A, File::B, File::C, File::D, File::E, File::F, File::G, File::H
    ];

    pub const fn from_index(idx: u8) -> Option<File> {
        match idx {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Column number as counted from the a-file, starting at 1.
    pub const fn from_number(column: u8) -> Option<File> {
        if column == 0 {
            None
        } else {
            File::from_index(column - 1)
        }
    }

    pub const fn of(sq: Square) -> File {
        match sq.index() & 7 {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => unreachable!(),
        }
    }

    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn next(self) -> Option<File> {
        File::from_index(self as u8 + 1)
    }

    pub const fn previous(self) -> Option<File> {
        match self {
            File::A => None,
            _ => File::from_index(self as u8 - 1),
        }
    }

    pub const fn to_char(self) -> char {
        File::CHARS[self as usize]
    }

    pub const fn from_char(c: char) -> Option<File> {
        match c.to_ascii_lowercase() {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(File::A.number(), 1);
        assert_eq!(File::H.number(), 8);
        assert_eq!(File::from_number(1), Some(File::A));
        assert_eq!(File::from_number(8), Some(File::H));
        assert_eq!(File::from_number(0), None);
        assert_eq!(File::from_number(9), None);
    }

    #[test]
    fn test_next_and_previous() {
        assert_eq!(File::A.next(), Some(File::B));
        assert_eq!(File::H.next(), None);
        assert_eq!(File::H.previous(), Some(File::G));
        assert_eq!(File::A.previous(), None);
    }

    #[test]
    fn test_chars() {
        for file in File::ALL {
            assert_eq!(File::from_char(file.to_char()), Some(file));
            assert_eq!(File::from_char(file.to_char().to_ascii_uppercase()), Some(file));
        }
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('1'), None);
    }

    #[test]
    fn test_all_is_ordered_by_index() {
        for (idx, file) in File::ALL.iter().enumerate() {
            assert_eq!(*file as usize, idx);
            assert_eq!(File::from_index(idx as u8), Some(*file));
        }
    }

}
