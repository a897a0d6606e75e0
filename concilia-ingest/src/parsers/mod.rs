//! Bank-specific row mappers.

pub mod bci;
pub mod estado;
