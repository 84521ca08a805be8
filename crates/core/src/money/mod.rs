//! Money module - parsing and formatting of currency strings.

mod money_parser;

pub use money_parser::{format_amount, format_signed, parse_amount, parse_range};
