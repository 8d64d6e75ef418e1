//! Symbol weight catalog errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog parse error: {message}")]
    ParseError { message: String },

    #[error("symbol {symbol} is listed in both {first} and {second}")]
    DuplicateSymbol {
        symbol: String,
        first: String,
        second: String,
    },
}

impl ErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
