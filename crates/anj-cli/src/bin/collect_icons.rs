use anj_cli::cli::CollectIcons;
use anj_core::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init();

    if let Err(err) = CollectIcons::run_from_args() {
        eprintln!("collect-icons error: {:#}", err);
        std::process::exit(1);
    }
}
