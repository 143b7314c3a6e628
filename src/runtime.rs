use log::SetLoggerError;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Sets up `env_logger`, honouring `RUST_LOG`. Fails if a logger is already installed.
pub fn init_logging() -> Result<(), SetLoggerError> {
    env_logger::try_init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, DEFAULT_LOG_FILTER),
    )
}
