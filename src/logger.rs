/// Map the `-v` count to a default filter. `RUST_LOG` still takes precedence.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init_logger(verbosity: u8) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(verbosity)),
    )
    .format_timestamp_secs()
    .init();
}
