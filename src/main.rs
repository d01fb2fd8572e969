use anyhow::Result;
use txt2fnt::cli;
use txt2fnt::report::StdoutSink;

fn main() -> Result<()> {
    // Parse CLI arguments first (before logging init for cleaner output)
    let options = cli::parse_options();

    // RUST_LOG controls diagnostics; progress lines go to stdout regardless.
    env_logger::init();
    log::info!("Starting txt2fnt v{}", txt2fnt::VERSION);

    let mut sink = StdoutSink;
    if let Err(e) = txt2fnt::app::run(&options, &mut sink) {
        eprintln!("txt2fnt: error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
