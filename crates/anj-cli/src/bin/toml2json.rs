use anj_cli::cli::Toml2Json;
use anj_core::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init();

    if let Err(err) = Toml2Json::run_from_args() {
        eprintln!("toml2json error: {:#}", err);
        std::process::exit(1);
    }
}
