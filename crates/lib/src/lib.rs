//! Loading, filtering and ordering of the IVG facility dataset.

pub mod collation;
mod dataset;
mod model;
mod view;

pub use dataset::*;
pub use model::*;
pub use view::*;
