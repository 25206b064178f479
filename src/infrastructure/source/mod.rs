//! Payload source infrastructure module

mod json_lines;

pub use json_lines::JsonLinesSource;
