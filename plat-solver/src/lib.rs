//! # plat-solver
//! A planner for subdividing a rectangular plot of land into saleable
//! rectangular sub-parcels. Every whole parcel size has a sale benefit given
//! by a [`pricing::PriceTable`], and every cut is charged proportionally to
//! its length; the objective is the partition maximising net value (total
//! benefit minus total cutting cost).
//!
//! The same problem is solved by three interchangeable
//! [`solvers::SubdivisionProcedure`]s so the methods can be compared:
//! * [`solvers::ExhaustiveSearch`] enumerates every distinct partition;
//!   guaranteed optimal but exponential, so it serves as a correctness
//!   oracle for small plots.
//! * [`solvers::GreedySearch`] commits to the best single cut judged with
//!   whole children, then optimises the two halves independently; fast but
//!   generally suboptimal.
//! * [`solvers::ExactSearch`] fills a bottom-up table over all sub-parcel
//!   sizes; guaranteed optimal in polynomial time.
//!
//! # Example
//! ```rust
//! use plat_solver::pricing::Pricing;
//! use plat_solver::solvers::ExactSearch;
//! use plat_solver::solvers::SubdivisionProcedure;
//!
//! // The built-in demonstration pricing: a 6x6 table, 20 per metre of cut.
//! let pricing = Pricing::standard();
//!
//! let mut search = ExactSearch::default();
//! let plat = search.optimise(&pricing, 6, 6).expect("the table covers 6x6");
//!
//! assert_eq!(plat.value, 1160);
//! // The plot is worth more cut into four 3m x 3m quarters than sold whole.
//! assert!(!plat.parcel.is_whole());
//! ```
//!
//! Partitions are ordinary owned trees ([`Parcel`]) which can be valued,
//! walked, and rendered:
//! ```rust
//! use plat_solver::Cut;
//! use plat_solver::Parcel;
//! use plat_solver::pricing::Pricing;
//!
//! let pricing = Pricing::standard();
//! let mut parcel = Parcel::new(2, 2)?;
//! parcel.subdivide(Cut::vertical(1), &pricing)?;
//!
//! // Two 1m x 2m halves at 40 each, minus a 2m cut at 20 per metre.
//! assert_eq!(parcel.value(&pricing)?, 40 + 40 - 40);
//! parcel.clear();
//! assert_eq!(parcel.value(&pricing)?, 140);
//! # Ok::<(), plat_solver::SubdivisionError>(())
//! ```
//!
//! ## Feature flags
//! - `debug-checks`: enable the more expensive internal assertions. Off by
//!   default.
pub mod containers;
pub mod plat_asserts;
pub mod pricing;
pub mod solvers;
pub mod statistics;

// We declare a private module with public use, so that the core types are
// exported directly from the crate root.
//
// Example:
// `use plat_solver::Parcel;`
// vs.
// `use plat_solver::basic_types::Parcel;`
mod basic_types;

pub use basic_types::Cut;
pub use basic_types::CutOrientation;
pub use basic_types::Money;
pub use basic_types::Parcel;
pub use basic_types::Plat;
pub use basic_types::Subdivision;
pub use basic_types::SubdivisionError;
