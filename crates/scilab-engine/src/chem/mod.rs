//! Pure chemistry logic: catalog, formulas, bonds, validation.
//!
//! No session state; every function here is a pure function of its inputs.

pub mod atom;
pub mod bonds;
pub mod compounds;
pub mod element;
pub mod formula;
pub mod lewis;
pub mod validation;
