use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use trialfinder_config::schema::{HostKind, LocationMode, PermissionPolicy, TrialFinderConfig};

/// trialfinder: a clinical trial finder widget in a native window.
#[derive(Parser, Debug)]
#[command(name = "trialfinder", version, about)]
pub struct Args {
    /// Widget identifier to load.
    #[arg(long)]
    pub widget_id: Option<String>,

    /// Document host rendering the widget.
    #[arg(long, value_enum)]
    pub host: Option<HostArg>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `trialfinder=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Never request the device location.
    #[arg(long)]
    pub no_location: bool,

    /// Grant the location request for this run.
    #[arg(long, conflicts_with = "no_location")]
    pub allow_location: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostArg {
    Bridge,
    Frame,
}

impl From<HostArg> for HostKind {
    fn from(arg: HostArg) -> Self {
        match arg {
            HostArg::Bridge => HostKind::Bridge,
            HostArg::Frame => HostKind::Frame,
        }
    }
}

impl Args {
    /// Layer command line overrides on top of the loaded config.
    pub fn apply_to(&self, config: &mut TrialFinderConfig) {
        if let Some(ref id) = self.widget_id {
            config.widget.id = id.clone();
        }
        if let Some(host) = self.host {
            config.bridge.host = host.into();
        }
        if self.no_location {
            config.location.mode = LocationMode::Disabled;
        }
        if self.allow_location {
            config.location.permission = PermissionPolicy::Granted;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leaves_config_alone() {
        let args = Args::try_parse_from(["trialfinder"]).unwrap();
        let mut config = TrialFinderConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.widget.id, TrialFinderConfig::default().widget.id);
        assert_eq!(config.location.mode, LocationMode::Ip);
        assert_eq!(config.location.permission, PermissionPolicy::Denied);
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let args = Args::try_parse_from([
            "trialfinder",
            "--widget-id",
            "oncology-2024",
            "--host",
            "frame",
            "--no-location",
        ])
        .unwrap();
        let mut config = TrialFinderConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.widget.id, "oncology-2024");
        assert_eq!(config.bridge.host, HostKind::Frame);
        assert_eq!(config.location.mode, LocationMode::Disabled);
    }

    #[test]
    fn config_and_log_level_are_captured() {
        let args = Args::try_parse_from([
            "trialfinder",
            "--config",
            "/tmp/tf.toml",
            "--log-level",
            "trialfinder=debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/tf.toml")));
        assert_eq!(args.log_level.as_deref(), Some("trialfinder=debug"));
    }

    #[test]
    fn allow_location_grants_permission() {
        let args = Args::try_parse_from(["trialfinder", "--allow-location"]).unwrap();
        let mut config = TrialFinderConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.location.permission, PermissionPolicy::Granted);
        assert_eq!(config.location.mode, LocationMode::Ip);
    }

    #[test]
    fn location_flags_conflict() {
        assert!(
            Args::try_parse_from(["trialfinder", "--no-location", "--allow-location"]).is_err()
        );
    }

    #[test]
    fn unknown_host_is_rejected() {
        assert!(Args::try_parse_from(["trialfinder", "--host", "native"]).is_err());
    }
}
