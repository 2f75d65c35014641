// Runs a selection of demos back to back under `=== Title ===` headings.

use colored::Colorize;
use std::io::Write;

use crate::config::{CatalogConfig, Demo};
use crate::creational::{builder, factory_method, singleton};
use crate::error::Result;
use crate::structural::{adapter, decorator};

pub fn run_demo(demo: Demo, out: &mut dyn Write) -> Result<()> {
    tracing::debug!(?demo, "running demo");
    match demo {
        Demo::Builder => builder::run(out),
        Demo::Singleton => singleton::run(out),
        Demo::FactoryMethod => factory_method::run(out),
        Demo::Adapter => adapter::run(out),
        Demo::Decorator => decorator::run(out),
    }
}

fn heading(demo: Demo, color: bool) -> String {
    let text = format!("=== {} ===", demo.title());
    if color {
        text.bold().cyan().to_string()
    } else {
        text
    }
}

/// Runs every configured demo in order, separated by blank lines.
pub fn run_catalog(config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    for (i, demo) in config.demos.iter().copied().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", heading(demo, config.color))?;
        run_demo(demo, out)?;
    }
    Ok(())
}
