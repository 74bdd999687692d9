use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maps the `-v` count to a level for the pwshield crates.
const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Builds the event filter. `RUST_LOG` wins when set; otherwise only the pwshield crates log,
/// at the level chosen by `-v`.
fn filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_for(verbose);
        EnvFilter::new(format!("pwshield={},pwshield_cli={}", level, level))
    })
}

/// Installs the global tracing subscriber.
///
/// Events go to stderr so that stdout carries only command output (ciphertexts, passwords,
/// keys) and can be piped. With `json`, each event is one flattened JSON object.
pub fn init_tracing(json: bool, verbose: u8) {
    let registry = tracing_subscriber::registry().with(filter(verbose));
    let layer = fmt::layer().with_writer(std::io::stderr);

    if json {
        registry.with(layer.json().flatten_event(true)).init();
    }
    else {
        registry.with(layer).init();
    }
}
