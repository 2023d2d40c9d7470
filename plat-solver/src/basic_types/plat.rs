use crate::basic_types::Money;
use crate::basic_types::Parcel;

/// The outcome of planning a plot: the best partition a solver found,
/// together with its net value.
///
/// The value is recorded at the moment the partition was selected, so
/// consumers do not need a price table to rank results. The parcel tree is
/// independently valuable as it can be rendered with [`Parcel::describe`] or
/// walked directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plat {
    /// The root parcel of the selected partition.
    pub parcel: Parcel,
    /// The net value of `parcel`: total benefit minus total cut cost.
    pub value: Money,
}
