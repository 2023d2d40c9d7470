use thiserror::Error;

use crate::basic_types::CutOrientation;

/// Errors arising from building, cutting, or valuing parcels.
///
/// None of these are transient: they signal a misconfigured price table or a
/// caller-side logic error, so they are propagated rather than retried or
/// defaulted. In particular a missing price is never treated as zero, since
/// that would silently corrupt every value comparison above the leaf.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubdivisionError {
    /// A plot or parcel was requested with a zero dimension.
    #[error("a plot must measure at least 1m x 1m, got {width}m x {height}m")]
    EmptyPlot { width: u32, height: u32 },
    /// The plot handed to a solver is not fully covered by the price table.
    ///
    /// Rejected at the solver's entry point: solving generates sub-parcels of
    /// every smaller size, all of which must be priceable.
    #[error(
        "a {width}m x {height}m plot exceeds the price table, which covers up to {max_width}m x {max_height}m"
    )]
    PlotTooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },
    /// A whole parcel was valued whose size has no entry in the price table.
    #[error(
        "no sale price for a {width}m x {height}m parcel; the price table covers up to {max_width}m x {max_height}m"
    )]
    MissingPrice {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },
    /// A cut whose line does not lie strictly inside the parcel.
    #[error("a {width}m x {height}m parcel admits no {orientation} cut at {position}m")]
    InvalidCut {
        width: u32,
        height: u32,
        orientation: CutOrientation,
        position: u32,
    },
}
