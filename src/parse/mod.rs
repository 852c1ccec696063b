pub mod text;
pub mod tokenize;
pub mod types;

pub use tokenize::split_into_simple_commands;
pub use types::{Operator, Token};
