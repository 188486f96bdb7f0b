//! Embedded prompt bodies, one file per category.
//!
//! Content is fixed at build time; there is no loading path from disk or
//! environment. Each file exports an ordered `(name, body)` slice - the
//! order here is the registration order every query preserves.

pub mod common;
pub mod fe;
pub mod react;
