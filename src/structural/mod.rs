//! Structural patterns: how objects are composed.

pub mod adapter;
pub mod decorator;
