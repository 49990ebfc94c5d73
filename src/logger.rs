use log::LevelFilter;

/// Installs the global logger. `RUST_LOG` still refines the given level per module.
pub fn init(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
