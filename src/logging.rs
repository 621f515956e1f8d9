use env_logger::{Builder, Env};

/// Filter used when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    /// Overrides `RUST_LOG`, e.g. `"hello_triangle=debug"`.
    pub filter: Option<String>,
}

/// Installs the global logger. Only the first call has an effect.
pub fn init_logging(config: &LoggingConfig) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(filter) = &config.filter {
        builder.parse_filters(filter);
    }

    if builder.try_init().is_ok() {
        log::debug!("logging initialized");
    }
}
