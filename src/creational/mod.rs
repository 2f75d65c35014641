//! Creational patterns: how objects come into being.

pub mod builder;
pub mod factory_method;
pub mod singleton;
