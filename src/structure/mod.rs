pub mod error;
pub mod matcher;
pub mod parser;
pub mod token;
