//! # Object-Oriented Design Patterns Catalog
//!
//! Small, self-contained demonstrations of classic patterns, each with a
//! client driver that narrates into any [`std::io::Write`] sink.
//!
//! ## Creational Patterns
//! - Builder (Director + ConcreteBuilder + Product)
//! - Singleton (lazily created, `OnceLock`-backed)
//! - Factory Method (trait factories and an enum lookup)
//!
//! ## Structural Patterns
//! - Adapter (Lightning vs USB computers)
//! - Decorator (stacked pizza toppings)
//!
//! Run individual demos with:
//! ```bash
//! cargo run --bin builder
//! cargo run --bin singleton
//! cargo run --bin factory_method
//! cargo run --bin adapter
//! cargo run --bin decorator
//! cargo run --bin catalog
//! ```

pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod structural;
pub mod telemetry;

pub use config::{CatalogConfig, Demo};
pub use error::{PatternError, Result};
