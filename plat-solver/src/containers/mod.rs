//! Contains the general-purpose storage types which the pricing tables and
//! solvers are built on.
mod grid;
mod keyed_vec;

pub use grid::*;
pub use keyed_vec::*;
