use chess_squares::tools::console::Console;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    Console::new().run(&args);
}
