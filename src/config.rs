//! Runtime configuration, sourced from the environment with working
//! defaults. A `.env` file is honored for local runs; nothing is required
//! to be set.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the application under test.
    pub base_url: String,
    /// Credentials for the valid-login scenarios.
    pub email: String,
    pub password: String,
    /// Run Chrome without a window unless `ZEN_HEADFUL` is set.
    pub headless: bool,
    pub timeouts: Timeouts,
}

/// Deadlines for the individual waits the page objects perform.
///
/// The defaults mirror the observed behavior of the target site; no single
/// timeout philosophy fits all of its surfaces, so each wait carries its
/// own. The page and probe deadlines are env-overridable.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    /// URL/title settling after login or logout.
    pub page: Duration,
    /// Shorter deadline used by the non-throwing logged-in probe.
    pub probe: Duration,
    /// Form fields becoming visible or enabled.
    pub field: Duration,
    /// Profile trigger becoming visible.
    pub trigger: Duration,
    /// Account menu opening after the trigger is clicked.
    pub menu: Duration,
    /// Each logout-control candidate becoming clickable.
    pub action: Duration,
    /// Error banner after a rejected submit.
    pub error_banner: Duration,
    /// Fixed pause after overlay dismissal.
    pub settle: Duration,
    /// Polling interval for all bounded waits.
    pub poll: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            page: Duration::from_secs(15),
            probe: Duration::from_secs(12),
            field: Duration::from_secs(10),
            trigger: Duration::from_secs(12),
            menu: Duration::from_secs(8),
            action: Duration::from_secs(6),
            error_banner: Duration::from_secs(5),
            settle: Duration::from_millis(200),
            poll: Duration::from_millis(100),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Timeouts::default();
        let timeouts = Timeouts {
            page: env_secs("ZEN_PAGE_TIMEOUT_SECS", defaults.page),
            probe: env_secs("ZEN_PROBE_TIMEOUT_SECS", defaults.probe),
            ..defaults
        };

        Self {
            base_url: env_or("ZEN_BASE_URL", "https://v2.zenclass.in"),
            email: env_or("ZEN_EMAIL", "surbhi11@gmail.com"),
            password: env_or("ZEN_PASSWORD", "Avni2575"),
            headless: !env_flag("ZEN_HEADFUL"),
            timeouts,
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url.trim_end_matches('/'))
    }
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

fn env_flag(key: &str) -> bool {
    matches!(std::env::var(key), Ok(v) if !v.trim().is_empty())
}

fn env_secs(key: &str, default: Duration) -> Duration {
    match std::env::var(key) {
        Ok(v) => v
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .unwrap_or(default),
        _ => default,
    }
}
