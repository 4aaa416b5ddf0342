//! nanofin-ingest: bank statement ingestion (JSON exports) and field cleaning.

pub mod error;
pub mod parsers;
pub mod types;

pub use error::{StatementError, StatementResult};
pub use parsers::{parse_statement_file, parse_statement_str, parse_statement_value};
pub use types::{Profile, StatementDocument};
