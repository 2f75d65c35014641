// Factory Method demo: the same words through three localizers.
use colored::Colorize;
use oo_design_patterns::creational::factory_method;
use oo_design_patterns::telemetry;

fn main() {
    telemetry::init();
    let mut out = std::io::stdout().lock();
    if let Err(err) = factory_method::run(&mut out) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
