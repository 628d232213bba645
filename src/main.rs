use clap::Parser;

use scaffold_cli::{app_controller, ui};

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args = ui::cli::Cli::parse();
    if let Err(err) = app_controller::run(args) {
        ui::output::print_error(&err);
        std::process::exit(1);
    }
}
