//! Desk configuration loaded from environment variables and command-line
//! flags.
//!
//! All settings have defaults so the desk starts with zero configuration.
//! Flags override the environment.

use std::path::PathBuf;

use clap::Parser;
use hostel_shared::types::{AttendanceMatch, IdStyle};
use hostel_store::RecordStore;

/// Command-line flags.
#[derive(Debug, Default, Parser)]
#[command(name = "hostel-desk", version, about = "Console desk for a small hostel")]
pub struct Cli {
    /// Directory holding the JSON collections.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// How new complaint and event ids are rendered (padded or plain).
    #[arg(long, value_name = "STYLE")]
    pub id_style: Option<IdStyle>,

    /// How attendance names are compared (insensitive or sensitive).
    #[arg(long, value_name = "POLICY")]
    pub attendance_match: Option<AttendanceMatch>,

    /// Do not write default accounts, rooms and menu on an empty store.
    #[arg(long)]
    pub no_seed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Env: `HOSTEL_DATA_DIR`
    /// Default: platform data directory, or `./data` when none exists.
    pub data_dir: Option<PathBuf>,

    /// Env: `HOSTEL_ID_STYLE` (padded/plain)
    /// Default: `padded`
    pub id_style: IdStyle,

    /// Env: `HOSTEL_ATTENDANCE_MATCH` (insensitive/sensitive)
    /// Default: `insensitive`
    pub attendance_match: AttendanceMatch,

    /// Env: `HOSTEL_SEED` (true/false)
    /// Default: `true`
    pub seed: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            id_style: IdStyle::default(),
            attendance_match: AttendanceMatch::default(),
            seed: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = var("HOSTEL_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(style) = var("HOSTEL_ID_STYLE") {
            match style.parse() {
                Ok(parsed) => config.id_style = parsed,
                Err(e) => {
                    tracing::warn!(error = %e, "Invalid HOSTEL_ID_STYLE, using default");
                }
            }
        }

        if let Some(policy) = var("HOSTEL_ATTENDANCE_MATCH") {
            match policy.parse() {
                Ok(parsed) => config.attendance_match = parsed,
                Err(e) => {
                    tracing::warn!(error = %e, "Invalid HOSTEL_ATTENDANCE_MATCH, using default");
                }
            }
        }

        if let Some(val) = var("HOSTEL_SEED") {
            match val.to_lowercase().as_str() {
                "true" | "1" | "yes" => config.seed = true,
                "false" | "0" | "no" => config.seed = false,
                _ => {
                    tracing::warn!(value = %val, "Invalid HOSTEL_SEED, using default (true)");
                }
            }
        }

        config
    }

    /// Apply command-line flags on top of this configuration.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.data_dir {
            self.data_dir = Some(dir.clone());
        }
        if let Some(style) = cli.id_style {
            self.id_style = style;
        }
        if let Some(policy) = cli.attendance_match {
            self.attendance_match = policy;
        }
        if cli.no_seed {
            self.seed = false;
        }
        self
    }

    /// The directory the store will use.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        match RecordStore::default_data_dir() {
            Ok(dir) => dir,
            Err(e) => {
                tracing::warn!(error = %e, "using ./data");
                PathBuf::from("./data")
            }
        }
    }

    pub fn open_store(&self) -> RecordStore {
        RecordStore::open_at(self.resolved_data_dir())
            .with_id_style(self.id_style)
            .with_attendance_match(self.attendance_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[]));
        assert_eq!(config, CliConfig::default());
        assert!(config.seed);
        assert_eq!(config.id_style, IdStyle::Padded);
    }

    #[test]
    fn test_env_values() {
        let config = CliConfig::from_lookup(lookup(&[
            ("HOSTEL_DATA_DIR", "/tmp/hostel"),
            ("HOSTEL_ID_STYLE", "plain"),
            ("HOSTEL_ATTENDANCE_MATCH", "Sensitive"),
            ("HOSTEL_SEED", "no"),
        ]));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/hostel")));
        assert_eq!(config.id_style, IdStyle::Plain);
        assert_eq!(config.attendance_match, AttendanceMatch::Sensitive);
        assert!(!config.seed);
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let config = CliConfig::from_lookup(lookup(&[
            ("HOSTEL_ID_STYLE", "fancy"),
            ("HOSTEL_SEED", "maybe"),
        ]));
        assert_eq!(config.id_style, IdStyle::Padded);
        assert!(config.seed);
    }

    #[test]
    fn test_flags_override_env() {
        let cli = Cli::parse_from([
            "hostel-desk",
            "--data-dir",
            "/srv/desk",
            "--id-style",
            "padded",
            "--no-seed",
        ]);
        let config = CliConfig::from_lookup(lookup(&[
            ("HOSTEL_DATA_DIR", "/tmp/hostel"),
            ("HOSTEL_ID_STYLE", "plain"),
        ]))
        .with_cli(&cli);

        assert_eq!(config.resolved_data_dir(), PathBuf::from("/srv/desk"));
        assert_eq!(config.id_style, IdStyle::Padded);
        assert!(!config.seed);
    }

    #[test]
    fn test_open_store_applies_policies() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = CliConfig {
            data_dir: Some(dir.path().to_path_buf()),
            id_style: IdStyle::Plain,
            attendance_match: AttendanceMatch::Sensitive,
            seed: false,
        };
        let store = config.open_store();
        assert_eq!(store.root(), dir.path());
        assert_eq!(store.id_style(), IdStyle::Plain);
        assert_eq!(store.attendance_match(), AttendanceMatch::Sensitive);
    }
}
