use std::env;

use zettel_cards::settings::{config_path_from_lookup, Settings, CONFIG_PATH_ENV_KEYS};

/// Logging goes to stderr only: stdout carries the MCP protocol.
pub(crate) fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Settings snapshot for the lifetime of the process.
pub(crate) fn load_settings() -> Settings {
    let path = config_path_from_lookup(|key| env::var(key).ok());
    log::debug!(
        "Config path {} (override keys: {})",
        path.display(),
        CONFIG_PATH_ENV_KEYS.join(", ")
    );

    let settings = Settings::load_or_default(&path);
    log::info!(
        "Cards go to {} (template: {}, backup: {}, sanitize: {})",
        settings.output_directory.display(),
        settings.template_path.display(),
        settings.create_backup,
        settings.filename_sanitization
    );
    settings
}
