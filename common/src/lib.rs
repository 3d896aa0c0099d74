//! Converter Common Types
//!
//! This crate contains shared types used across the converter workspace,
//! including monetary types, the conversion error taxonomy and the tagged
//! outcome handed to front ends.

pub mod error;
pub mod monetary;
pub mod outcome;

pub use error::*;
pub use monetary::*;
pub use outcome::*;
