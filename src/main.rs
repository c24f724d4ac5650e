use imagetoascii::cli::{self, Invocation};
use imagetoascii::driver;
use imagetoascii::AsciiError;

/// Report a fatal error and exit.
fn fail(err: AsciiError) -> ! {
    match err {
        // clap formats its own usage message and picks the status
        AsciiError::Usage(e) => e.exit(),
        other => {
            log::debug!("{:?}", other);
            eprintln!("Error: {}", other);
            std::process::exit(other.exit_code());
        }
    }
}

fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let args = cli::parse_args(std::env::args_os()).unwrap_or_else(|e| fail(e));
    init_logging(args.log_level());

    let invocation = Invocation::resolve(&args).unwrap_or_else(|e| fail(e));
    log::debug!("{:?}", invocation);

    match driver::run(&invocation) {
        Ok(summary) => log::info!(
            "Done: {}x{} -> {}",
            summary.columns,
            summary.lines,
            summary.output.display()
        ),
        Err(e) => fail(e),
    }
}
