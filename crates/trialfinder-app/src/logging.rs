//! Log filter setup.
//!
//! Logging starts before the config is read so config warnings are not
//! lost. Once the config is loaded its `[logging] level` replaces the
//! default directive, unless `--log-level` was given.

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

pub const DEFAULT_DIRECTIVE: &str = "trialfinder=info";

pub struct LogHandle {
    reload: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl LogHandle {
    /// Switch to the config's directive. No-op when the command line
    /// already chose one.
    pub fn apply_config_directive(&self, directive: &str) {
        if self.pinned {
            return;
        }
        if let Err(e) = self.reload.reload(env_filter(directive)) {
            tracing::warn!("Failed to apply log level from config: {e}");
        }
    }
}

/// `RUST_LOG` plus `directive`, falling back to [`DEFAULT_DIRECTIVE`] when
/// `directive` does not parse.
pub fn env_filter(directive: &str) -> EnvFilter {
    let directive: Directive = directive
        .parse()
        .or_else(|_| DEFAULT_DIRECTIVE.parse())
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    EnvFilter::from_default_env().add_directive(directive)
}

pub fn init(cli_directive: Option<&str>) -> LogHandle {
    let (filter, reload) =
        reload::Layer::new(env_filter(cli_directive.unwrap_or(DEFAULT_DIRECTIVE)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    LogHandle {
        reload,
        pinned: cli_directive.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_accepts_valid_directive() {
        let filter = env_filter("trialfinder=debug");
        assert!(filter.to_string().contains("trialfinder=debug"));
    }

    #[test]
    fn env_filter_falls_back_on_garbage() {
        let filter = env_filter("trialfinder=loudest");
        assert!(filter.to_string().contains("trialfinder=info"));
    }
}
