// Builder demo: a basic, a full featured and a custom product.
use colored::Colorize;
use oo_design_patterns::creational::builder;
use oo_design_patterns::telemetry;

fn main() {
    telemetry::init();
    let mut out = std::io::stdout().lock();
    if let Err(err) = builder::run(&mut out) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
