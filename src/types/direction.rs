use std::fmt;
use std::str::FromStr;

/// The eight ways to step from one square to a neighbouring one. 'Up' is
/// towards the eighth rank and 'Right' towards the h-file.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum Direction {
    Up, Down, Right, Left, RightUp, RightDown, LeftUp, LeftDown
}

impl Direction {

    pub const COUNT: usize = 8;

    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::Up, Direction::Down, Direction::Right, Direction::Left,
        Direction::RightUp, Direction::RightDown, Direction::LeftUp, Direction::LeftDown,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up, Direction::Down, Direction::Right, Direction::Left
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::RightUp, Direction::RightDown, Direction::LeftUp, Direction::LeftDown
    ];

    /// (column delta, row delta) of a full step.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::RightUp => (1, 1),
            Direction::RightDown => (1, -1),
            Direction::LeftUp => (-1, 1),
            Direction::LeftDown => (-1, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::RightUp => Direction::LeftDown,
            Direction::RightDown => Direction::LeftUp,
            Direction::LeftUp => Direction::RightDown,
            Direction::LeftDown => Direction::RightUp,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(self, Direction::RightUp | Direction::RightDown | Direction::LeftUp | Direction::LeftDown)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::RightUp => "right-up",
            Direction::RightDown => "right-down",
            Direction::LeftUp => "left-up",
            Direction::LeftDown => "left-down",
        }
    }

}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s.trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match name.as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "right" => Ok(Direction::Right),
            "left" => Ok(Direction::Left),
            "rightup" => Ok(Direction::RightUp),
            "rightdown" => Ok(Direction::RightDown),
            "leftup" => Ok(Direction::LeftUp),
            "leftdown" => Ok(Direction::LeftDown),
            _ => Err(format!("Unknown direction '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_cancels_offset() {
        for dir in Direction::ALL {
            let (dc, dr) = dir.offset();
            let (oc, or) = dir.opposite().offset();
            assert_eq!((dc + oc, dr + or), (0, 0), "{} and its opposite do not cancel", dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_diagonal_partition() {
        for dir in Direction::DIAGONAL {
            assert!(dir.is_diagonal());
        }
        for dir in Direction::ORTHOGONAL {
            assert!(!dir.is_diagonal());
        }
    }

    #[test]
    fn test_parse_names() {
        for dir in Direction::ALL {
            assert_eq!(dir.name().parse::<Direction>(), Ok(dir));
        }
        assert_eq!("RightUp".parse::<Direction>(), Ok(Direction::RightUp));
        assert_eq!("left_down".parse::<Direction>(), Ok(Direction::LeftDown));
        assert!("sideways".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

}
