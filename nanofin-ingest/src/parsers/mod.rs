pub mod fields;
pub mod json_statement;

pub use json_statement::{parse_statement_file, parse_statement_str, parse_statement_value};
