//! Session bootstrap shared by the browser scenarios.
//!
//! Scenarios are extensive when a live target is reachable and skip
//! gracefully when it is not, so CI without Chrome or network access still
//! passes.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::browser::{Browser, Page};
use crate::config::Config;

/// Opt-in switch for scenarios that drive the real site.
const LIVE_ENV: &str = "ZEN_E2E_LIVE";

/// Install the fmt subscriber once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Build a browser session against the configured target, or `None` when
/// the scenario should skip: opt-in unset, site unreachable, or no local
/// Chrome to drive.
///
/// The returned [`Browser`] must be kept alive for as long as the page is
/// used.
pub fn live_session() -> Option<(Browser, Page, Config)> {
    init_logging();

    if std::env::var(LIVE_ENV)
        .map(|v| v.trim().is_empty())
        .unwrap_or(true)
    {
        eprintln!("skipping: set {LIVE_ENV}=1 to run live browser scenarios");
        return None;
    }

    let config = Config::from_env();

    if !reachable(&config.base_url) {
        eprintln!("skipping: {} is not reachable", config.base_url);
        return None;
    }

    let browser = match Browser::launch(config.headless) {
        Ok(browser) => browser,
        Err(err) => {
            eprintln!("skipping: browser launch failed: {err:#}");
            return None;
        }
    };
    let page = match browser.new_page() {
        Ok(mut page) => {
            page.set_poll(config.timeouts.poll);
            page
        }
        Err(err) => {
            eprintln!("skipping: page creation failed: {err:#}");
            return None;
        }
    };

    Some((browser, page, config))
}

fn reachable(url: &str) -> bool {
    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
    {
        Ok(client) => client,
        Err(_) => return false,
    };
    client
        .get(url)
        .send()
        .map(|response| response.status().is_success() || response.status().is_redirection())
        .unwrap_or(false)
}
