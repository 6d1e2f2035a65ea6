// synmark/src/logger.rs
//! Process-wide logger setup.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger` on stderr.
///
/// With `Some(level)` the level is forced and `RUST_LOG` is ignored; with
/// `None`, `RUST_LOG` applies and defaults to `warn`. Calling this more than
/// once is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = match level_override {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
