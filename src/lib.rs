#![doc = include_str!("../README.md")]

pub mod error;
pub mod loader;
pub mod pipeline;
pub mod select;
pub mod spatial;
pub mod workspace;
pub mod writer;

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use pipeline::{run, Config, Outcome};
#[doc(inline)]
pub use select::{select_closest, Facility, RankedFacility, ResultSet, Selection};
