use log::LevelFilter;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// A unique lowercase database name so parallel tests never share a store.
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}{}", spool_core::random_token(10).to_lowercase())
}
