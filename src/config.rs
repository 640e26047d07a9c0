use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use wareki_format::FormatOptions;

/// Top-level wareki configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WarekiConfig {
    /// Default rendering switches (`[format]` table).
    #[serde(default)]
    pub format: FormatOptions,
}

impl WarekiConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Merges CLI flags over the file defaults. A flag given either way
    /// replaces the file value; `None` keeps it.
    pub fn format_options(&self, gannen: Option<bool>, full_width: Option<bool>) -> FormatOptions {
        self.format
            .with_gannen(gannen.unwrap_or(self.format.gannen()))
            .with_full_width(full_width.unwrap_or(self.format.full_width()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn empty_file_is_default() {
        let config: WarekiConfig = toml::from_str("").unwrap();
        assert_eq!(config.format_options(None, None), FormatOptions::new());
    }

    #[test]
    fn file_values_apply() {
        let config: WarekiConfig = toml::from_str("[format]\ngannen = true\n").unwrap();
        let options = config.format_options(None, None);
        assert!(options.gannen());
        assert!(!options.full_width());
    }

    #[test]
    fn flags_turn_options_on() {
        let config = WarekiConfig::default();
        let options = config.format_options(Some(true), Some(true));
        assert!(options.gannen());
        assert!(options.full_width());
    }

    #[test]
    fn flags_turn_file_options_off() {
        let config: WarekiConfig =
            toml::from_str("[format]\ngannen = true\nfull_width = true\n").unwrap();
        let options = config.format_options(Some(false), Some(false));
        assert!(!options.gannen());
        assert!(!options.full_width());

        let options = config.format_options(Some(false), None);
        assert!(!options.gannen());
        assert!(options.full_width());
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<WarekiConfig>("[format]\nzenkaku = true\n").is_err());
        assert!(toml::from_str::<WarekiConfig>("[output]\njson = true\n").is_err());
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[format]\nfull_width = true").unwrap();
        let config = WarekiConfig::load(file.path()).unwrap();
        assert!(config.format_options(None, None).full_width());
    }

    #[test]
    fn load_missing_file() {
        let err = WarekiConfig::load(Path::new("/nonexistent/wareki.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }
}
