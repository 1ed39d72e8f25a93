use crate::types::{File, Rank, Square};
use crate::{AUTHOR, VERSION};

const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

pub fn print_info() {
    let version_formatted = format!("{CYAN}{VERSION}{RESET}");
    let author_formatted = format!("{CYAN}{}{}", AUTHOR, RESET);
    println!("┌──────────────────────────────────────────┐");
    println!("│ chess-squares                            │");
    println!("│ Version: {:<41}│", version_formatted);
    println!("│ Author: {:<42}│", author_formatted);
    println!("└──────────────────────────────────────────┘");
    println!("Type 'help' for a list of commands.");
}

/// Draws the board with `o` on the origin and `x` on each marked square. White
/// is at the bottom unless `flip` is set.
pub fn render(origin: Option<Square>, marked: &[Square], flip: bool) -> String {
    let mut out = String::new();
    for row in (0..Rank::COUNT).rev() {
        let mut line = String::new();
        for column in 0..File::COUNT {
            let sq = display_square(column, row, flip);
            if column == 0 {
                line.push(sq.rank().to_char());
            }
            line.push(' ');
            line.push(if Some(sq) == origin {
                'o'
            } else if marked.contains(&sq) {
                'x'
            } else {
                '.'
            });
        }
        out.push_str(&line);
        out.push('\n');
    }
    out.push(' ');
    for column in 0..File::COUNT {
        out.push(' ');
        out.push(display_square(column, 0, flip).file().to_char());
    }
    out.push('\n');
    out
}

fn display_square(column: usize, row: usize, flip: bool) -> Square {
    let sq = Square::from(File::ALL[column], Rank::ALL[row]);
    if flip { sq.flip_rank().flip_file() } else { sq }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn test_render_empty_board() {
        let board = render(None, &[], false);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 . . . . . . . .");
        assert_eq!(lines[7], "1 . . . . . . . .");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn test_render_ray() {
        let origin: Square = "c1".parse().unwrap();
        let ray = origin.ray(Direction::RightUp);
        let board = render(Some(origin), &ray, false);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[7], "1 . . o . . . . .");
        assert_eq!(lines[6], "2 . . . x . . . .");
        assert_eq!(lines[2], "6 . . . . . . . x");
        assert_eq!(lines[1], "7 . . . . . . . .");
    }

    #[test]
    fn test_render_flipped() {
        let origin: Square = "a1".parse().unwrap();
        let board = render(Some(origin), &[], true);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[0], "1 . . . . . . . o");
        assert_eq!(lines[7], "8 . . . . . . . .");
        assert_eq!(lines[8], "  h g f e d c b a");
    }

}
