pub mod direction;
pub mod file;
pub mod rank;
pub mod square;

pub use direction::Direction;
pub use file::File;
pub use rank::Rank;
pub use square::Square;
