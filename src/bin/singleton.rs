// Singleton demo: prints whether two accessor calls share one instance.
use colored::Colorize;
use oo_design_patterns::creational::singleton;
use oo_design_patterns::telemetry;

fn main() {
    telemetry::init();
    let mut out = std::io::stdout().lock();
    if let Err(err) = singleton::run(&mut out) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
