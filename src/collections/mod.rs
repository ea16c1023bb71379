//! Branded collections.

pub mod branded_vec;

pub use branded_vec::BrandedVec;
