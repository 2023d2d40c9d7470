//! Core types describing a plot of land, the cuts through it, and the
//! resulting subdivision trees.
mod cut;
mod parcel;
mod plat;
mod subdivision_error;

pub use cut::Cut;
pub use cut::CutOrientation;
pub use parcel::Parcel;
pub use parcel::Subdivision;
pub use plat::Plat;
pub use subdivision_error::SubdivisionError;

/// The type of monetary amounts: sale benefits, cut costs, and net values.
pub type Money = i64;
