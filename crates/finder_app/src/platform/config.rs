//! Runtime configuration, read from `FINDER_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use finder_core::{ResponseOrder, SearchConfig};
use finder_engine::SearchSettings;
use log::LevelFilter;

use super::logging::LogDestination;

const LOG_FILENAME: &str = "finder.log";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: SearchSettings,
    pub search: SearchConfig,
    /// Stand-in for the browser's `prefers-color-scheme: dark` query.
    pub prefers_dark: bool,
    /// Directory holding the theme preference and the log file.
    pub state_dir: PathBuf,
    pub log_level: LevelFilter,
    pub log_destination: LogDestination,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut settings = SearchSettings::default();
        if let Some(base_url) = lookup("FINDER_BASE_URL") {
            settings.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = lookup("FINDER_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("FINDER_TIMEOUT_SECS is not a number: {secs:?}"))?;
            settings.request_timeout = Duration::from_secs(secs);
        }

        let mut search = SearchConfig::default();
        if let Some(ms) = lookup("FINDER_DEBOUNCE_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("FINDER_DEBOUNCE_MS is not a number: {ms:?}"))?;
            search.quiet_period = Duration::from_millis(ms);
        }
        if let Some(order) = lookup("FINDER_RESPONSE_ORDER") {
            search.response_order = match ResponseOrder::parse(&order) {
                Some(order) => order,
                None => bail!("FINDER_RESPONSE_ORDER must be `latest` or `arrival`, got {order:?}"),
            };
        }

        let prefers_dark = match lookup("FINDER_PREFERS_DARK") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("FINDER_PREFERS_DARK is not a boolean: {raw:?}"))?,
            None => true,
        };

        let log_destination = match lookup("FINDER_LOG_TO") {
            Some(raw) => LogDestination::parse(&raw)
                .with_context(|| format!("FINDER_LOG_TO must be file, terminal or both: {raw:?}"))?,
            None => LogDestination::File,
        };

        Ok(Self {
            settings,
            search,
            prefers_dark,
            state_dir: lookup("FINDER_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            log_level: lookup("FINDER_LOG")
                .map(|raw| finder_logging::parse_level(&raw))
                .unwrap_or(LevelFilter::Info),
            log_destination,
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join(LOG_FILENAME)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_match_page_behaviour() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.search, SearchConfig::default());
        assert_eq!(config.settings.base_url, "http://127.0.0.1:8000");
        assert!(config.prefers_dark);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.log_destination, LogDestination::File);
        assert_eq!(config.log_path(), PathBuf::from("./finder.log"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("FINDER_BASE_URL", "https://charts.example.com/"),
            ("FINDER_DEBOUNCE_MS", "250"),
            ("FINDER_RESPONSE_ORDER", "arrival"),
            ("FINDER_PREFERS_DARK", "no"),
            ("FINDER_STATE_DIR", "/tmp/finder"),
            ("FINDER_LOG", "debug"),
            ("FINDER_LOG_TO", "both"),
        ])
        .unwrap();

        assert_eq!(config.settings.base_url, "https://charts.example.com");
        assert_eq!(config.search.quiet_period, Duration::from_millis(250));
        assert_eq!(config.search.response_order, ResponseOrder::ArrivalOrder);
        assert!(!config.prefers_dark);
        assert_eq!(config.log_path(), PathBuf::from("/tmp/finder/finder.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_destination, LogDestination::Both);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config_from(&[("FINDER_DEBOUNCE_MS", "soon")]).is_err());
        assert!(config_from(&[("FINDER_RESPONSE_ORDER", "random")]).is_err());
        assert!(config_from(&[("FINDER_PREFERS_DARK", "maybe")]).is_err());
        assert!(config_from(&[("FINDER_LOG_TO", "syslog")]).is_err());
    }
}
