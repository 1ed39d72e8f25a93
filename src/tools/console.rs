use crate::tools::pretty;
use crate::types::{Direction, Square};
use std::io;

/// Console settings, changed with `setoption`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub flip: bool,
    pub uppercase: bool,
}

impl Options {

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), String> {
        let value = parse_bool(value)?;
        match name {
            "flip" => self.flip = value,
            "uppercase" => self.uppercase = value,
            _ => return Err(format!("unknown option '{}'", name)),
        }
        Ok(())
    }

}

#[derive(Default)]
pub struct Console {
    pub options: Options,
}

impl Console {

    pub fn new() -> Console {
        Console { options: Options::default() }
    }

    pub fn run(&mut self, args: &[String]) {
        if args.len() > 1 {
            self.reply(&args[1..].join(" "));
            return;
        }
        pretty::print_info();
        loop {
            let mut command = String::new();
            let bytes = match io::stdin().read_line(&mut command) {
                Ok(n) => n,
                Err(_) => { println!("info error: failed to read line"); continue; }
            };
            if bytes == 0 {
                break;
            }
            if command.split_ascii_whitespace().next() == Some("quit") {
                break;
            }
            self.reply(&command);
        }
    }

    fn reply(&mut self, command: &str) {
        match self.handle(command) {
            Ok(out) if out.is_empty() => (),
            Ok(out) => println!("{}", out.trim_end()),
            Err(e) => println!("info error: {}", e),
        }
    }

    /// Executes one command line and returns what it should print.
    pub fn handle(&mut self, command: &str) -> Result<String, String> {
        let tokens: Vec<&str> = command.split_ascii_whitespace().collect();
        match tokens.as_slice() {
            [] => Ok(String::new()),
            ["square", sq] => self.handle_square(sq),
            ["step", dir, sq] => self.handle_step(dir, sq),
            ["ray", dir, sq] => self.handle_ray(dir, sq),
            ["show", sq] => self.handle_show(sq, None),
            ["show", sq, dir] => self.handle_show(sq, Some(*dir)),
            ["setoption", "name", name, "value", value] => self.handle_setoption(name, value),
            ["help"] => Ok(help()),
            [first, ..] => match *first {
                "square" | "step" | "ray" | "show" | "setoption" =>
                    Err(format!("wrong arguments for '{}', see 'help'", first)),
                _ => Err(format!("unknown command '{}'", first)),
            },
        }
    }

    fn handle_square(&self, sq: &str) -> Result<String, String> {
        let sq: Square = sq.parse()?;
        Ok(format!(
            "square {} column {} row {} firstcolumn {} lastcolumn {} firstrow {} lastrow {}",
            self.name(sq), sq.column(), sq.row(),
            sq.is_first_column(), sq.is_last_column(), sq.is_first_row(), sq.is_last_row()
        ))
    }

    fn handle_step(&self, dir: &str, sq: &str) -> Result<String, String> {
        let dir: Direction = dir.parse()?;
        let sq: Square = sq.parse()?;
        Ok(format!("step {} {} {}", self.name(sq), dir, self.name(sq.step(dir))))
    }

    fn handle_ray(&self, dir: &str, sq: &str) -> Result<String, String> {
        let dir: Direction = dir.parse()?;
        let sq: Square = sq.parse()?;
        let squares: Vec<String> = sq.ray(dir).iter().map(|&s| self.name(s)).collect();
        Ok(format!("ray {} {} {}", self.name(sq), dir, squares.join(" ")).trim_end().to_string())
    }

    fn handle_show(&self, sq: &str, dir: Option<&str>) -> Result<String, String> {
        let sq: Square = sq.parse()?;
        let marked = match dir {
            Some(dir) => sq.ray(dir.parse()?).to_vec(),
            None => sq.neighbours().to_vec(),
        };
        Ok(pretty::render(Some(sq), &marked, self.options.flip))
    }

    fn handle_setoption(&mut self, name: &str, value: &str) -> Result<String, String> {
        let name = name.to_lowercase();
        self.options.set(&name, &value.to_lowercase())?;
        Ok(format!("info string {} {}", name, value.to_lowercase()))
    }

    fn name(&self, sq: Square) -> String {
        if self.options.uppercase { sq.to_string().to_uppercase() } else { sq.to_string() }
    }

}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(format!("invalid value '{}'", s)),
    }
}

fn help() -> String {
    [
        "square <sq>                          column, row and edges of a square",
        "step <dir> <sq>                      one step, staying put at the edge",
        "ray <dir> <sq>                       squares passed sliding to the edge",
        "show <sq> [dir]                      draw the ray, or the neighbours",
        "setoption name <name> value <bool>   options: flip, uppercase",
        "quit",
        "directions: up down right left right-up right-down left-up left-down",
    ].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_info() {
        let mut console = Console::new();
        assert_eq!(
            console.handle("square c8"),
            Ok("square c8 column 3 row 8 firstcolumn false lastcolumn false firstrow false lastrow true".to_string())
        );
    }

    #[test]
    fn test_step_and_ray() {
        let mut console = Console::new();
        assert_eq!(console.handle("step right-up c8"), Ok("step c8 right-up d8".to_string()));
        assert_eq!(console.handle("step up h8"), Ok("step h8 up h8".to_string()));
        assert_eq!(console.handle("ray left d1"), Ok("ray d1 left c1 b1 a1".to_string()));
        assert_eq!(console.handle("ray up a8"), Ok("ray a8 up".to_string()));
    }

    #[test]
    fn test_uppercase_option() {
        let mut console = Console::new();
        assert_eq!(console.handle("setoption name Uppercase value TRUE"), Ok("info string uppercase true".to_string()));
        assert!(console.options.uppercase);
        assert_eq!(console.handle("step left b2"), Ok("step B2 left A2".to_string()));
    }

    #[test]
    fn test_flip_option_changes_show() {
        let mut console = Console::new();
        let white = console.handle("show a1").unwrap();
        console.handle("setoption name flip value true").unwrap();
        let black = console.handle("show a1").unwrap();
        assert_ne!(white, black);
        assert!(black.ends_with("  h g f e d c b a\n"));
    }

    #[test]
    fn test_errors() {
        let mut console = Console::new();
        assert!(console.handle("step sideways a1").is_err());
        assert!(console.handle("step up z9").is_err());
        assert!(console.handle("square").is_err());
        assert!(console.handle("castle").is_err());
        assert!(console.handle("setoption name flip value maybe").is_err());
        assert!(console.handle("setoption name hash value true").is_err());
        assert_eq!(console.options, Options::default());
    }

    #[test]
    fn test_blank_line() {
        let mut console = Console::new();
        assert_eq!(console.handle("   \n"), Ok(String::new()));
    }

}
