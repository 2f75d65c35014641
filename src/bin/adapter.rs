// Adapter demo: a Lightning client plugs into a Mac and an adapted Windows box.
use colored::Colorize;
use oo_design_patterns::structural::adapter;
use oo_design_patterns::telemetry;

fn main() {
    telemetry::init();
    let mut out = std::io::stdout().lock();
    if let Err(err) = adapter::run(&mut out) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
