//! Fixed-rate compound growth of contributions

mod compound;

pub use compound::{accumulate, compound, grow_lump_sum, Money, Rate};
