// Decorator demo: a veggie pizza priced with stacked toppings.
use colored::Colorize;
use oo_design_patterns::structural::decorator;
use oo_design_patterns::telemetry;

fn main() {
    telemetry::init();
    let mut out = std::io::stdout().lock();
    if let Err(err) = decorator::run(&mut out) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
