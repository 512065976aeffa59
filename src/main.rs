use std::env;

use segpass::{cli, exits, tui};

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 if cli::quiet::is_interactive() => tui::run(),
        _ => cli::run(args),
    };

    std::process::exit(code);
}
