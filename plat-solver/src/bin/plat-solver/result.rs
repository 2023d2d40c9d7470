use std::fmt::Display;

use plat_solver::SubdivisionError;
use plat_solver::pricing::PriceTableError;
use thiserror::Error;

pub(crate) type PlatResult<T> = Result<T, PlatError>;

#[derive(Error, Debug)]
pub(crate) enum PlatError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The price file {path} contains the invalid price `{entry}`.")]
    InvalidPrice { path: String, entry: String },
    #[error("The price table was invalid, more details: {0}")]
    InvalidPriceTable(#[from] PriceTableError),
    #[error("Failed to plan the plot, more details: {0}")]
    Subdivision(#[from] SubdivisionError),
}

impl PlatError {
    pub(crate) fn invalid_price(path: impl Display, entry: impl Display) -> Self {
        Self::InvalidPrice {
            path: format!("{path}"),
            entry: format!("{entry}"),
        }
    }
}
