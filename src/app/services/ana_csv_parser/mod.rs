//! Parser for ANA "Chuvas" station export files
//!
//! This module turns one semicolon-delimited, ISO-8859-1 encoded station
//! export into a canonical per-station monthly table. The parser is
//! deliberately forgiving at row level: rows with unparseable dates or
//! values degrade to missing data, and only a missing `Data` column or an
//! unreadable file fails the whole file.
//!
//! ## Architecture
//!
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`column_mapping`] - Column analysis and categorization
//! - [`record_parser`] - Individual CSV record processing
//! - [`field_parsers`] - Soft-failing field conversion utilities
//! - [`stats`] - Parsing statistics and result structures

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::RecordParser;
pub use stats::{ParseResult, ParseStats};
