pub mod board;
pub mod errors;
pub mod movegen;
