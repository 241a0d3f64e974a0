use std::env;

mod cli;
mod exits;
mod settings;
mod terminal;

fn main() {
    init_logging();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
