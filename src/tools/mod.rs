pub mod console;
pub mod pretty;
