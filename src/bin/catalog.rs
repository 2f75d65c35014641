// Runs the configured demos in catalog order.
// Set PATTERNS_CONFIG to a TOML file to pick demos or turn colour off.
use colored::Colorize;
use oo_design_patterns::catalog::run_catalog;
use oo_design_patterns::{telemetry, CatalogConfig};

fn main() {
    telemetry::init();

    let result = CatalogConfig::load().and_then(|config| {
        let mut out = std::io::stdout().lock();
        run_catalog(&config, &mut out)
    });

    if let Err(err) = result {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
