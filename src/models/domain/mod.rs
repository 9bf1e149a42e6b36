pub mod quiz;
pub mod table_row;

pub use quiz::{Quiz, QuizSpec};
pub use table_row::TableRow;
