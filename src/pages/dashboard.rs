//! Page object for the authenticated dashboard: landing checks, overlay
//! cleanup, and the logout flow.
//!
//! The target app renders its account menu through varying UI kits, so the
//! trigger, menu, and logout controls are all located through ordered
//! candidate chains rather than a single selector.

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::browser::Page;
use crate::config::Config;
use crate::error::E2eError;
use crate::selector::Query;

/// Login-shaped URL, case-insensitive.
fn login_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)/login").expect("pattern compiles"))
}

/// Dashboard-shaped URL, tolerant of the site's occasional misspelling.
fn dashboard_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)/dashbo?o?ard").expect("pattern compiles"))
}

/// Header title shown once the dashboard has landed.
const TITLE: Query = Query::Text {
    css: "p.header-name",
    needle: "dashboard",
};

/// Profile/account trigger, broad across common UI kits.
const PROFILE_TRIGGER: &[Query] = &[
    Query::Css("button[aria-label*='profile' i], button[aria-label*='account' i]"),
    Query::Css("img[alt*='profile' i], img[alt*='user' i]"),
    Query::Css(".MuiAvatar-root, .chakra-avatar, .ant-avatar"),
    Query::Css("[data-testid='Avatar'], [data-testid='account-menu']"),
    Query::Css("header :is(button, a, div)[class*='user' i]"),
    Query::Css("nav :is(button, a, div)[class*='user' i]"),
];

/// Opened account-menu container.
const USER_MENU: &[Query] = &[Query::Css(
    "[role='menu'], .MuiMenu-paper, .ant-dropdown, .chakra-menu__menu-list, .user-avatar-menu",
)];

/// Modal and dimming layers that intercept clicks.
const BACKDROPS: Query =
    Query::Css(".MuiBackdrop-root, .MuiModal-backdrop, .MuiModal-root, [role='dialog']");

/// Close controls tried, in order, while clearing overlays.
const CLOSE_CANDIDATES: &[Query] = &[
    Query::Css("[aria-label='Close']"),
    Query::Css("[aria-label='close']"),
    Query::Text {
        css: "button, [role='button']",
        needle: "close",
    },
    Query::Text {
        css: "button, [role='button']",
        needle: "cancel",
    },
    Query::Text {
        css: "button, [role='button']",
        needle: "dismiss",
    },
    Query::Text {
        css: "button.MuiButton-root",
        needle: "close",
    },
];

/// Logout controls tried, in order: the exact DOM target first, then role,
/// text, and attribute fallbacks.
const LOGOUT_CANDIDATES: &[Query] = &[
    Query::XPath("//div[@class='user-avatar-menu' and normalize-space()='Log out']"),
    Query::Text {
        css: "[role='menuitem']",
        needle: "log out",
    },
    Query::Text {
        css: "[role='menuitem']",
        needle: "sign out",
    },
    Query::Text {
        css: "button, a",
        needle: "logout",
    },
    Query::Css("[data-testid='logout']"),
    Query::Css("a[href*='logout']"),
    Query::Css("button[id*='logout' i]"),
    Query::Css("button[name*='logout' i]"),
];

pub struct DashboardPage<'a> {
    page: &'a Page,
    config: &'a Config,
}

impl<'a> DashboardPage<'a> {
    pub fn new(page: &'a Page, config: &'a Config) -> Self {
        Self { page, config }
    }

    /// Assert the session has landed on the dashboard: the URL is no longer
    /// login-shaped, is dashboard-shaped, and the header title is visible.
    pub fn wait_loaded(&self, timeout: Duration) -> Result<()> {
        self.page
            .wait_for_url_cleared(login_url_re(), timeout, "navigation away from login")?;
        self.page
            .wait_for_url(dashboard_url_re(), timeout, "dashboard url")?;
        self.page
            .wait_first_visible(&[TITLE], timeout, "dashboard title")?;
        Ok(())
    }

    /// Non-throwing probe: a failed [`Self::wait_loaded`] within the probe
    /// deadline reads as "not logged in".
    pub fn is_logged_in(&self) -> bool {
        self.wait_loaded(self.config.timeouts.probe).is_ok()
    }

    /// Best-effort removal of overlays that intercept clicks. Never fails;
    /// every step's errors are logged and discarded.
    pub fn dismiss_any_modal(&self) {
        for _ in 0..2 {
            if let Err(err) = self.page.press_key("Escape") {
                debug!("dashboard.dismiss_any_modal: escape failed: {err:#}");
            }
        }

        for query in CLOSE_CANDIDATES {
            if let Some(button) = self.page.first_visible(&[*query]) {
                if let Err(err) = button.click() {
                    debug!("dashboard.dismiss_any_modal: close candidate failed: {err:#}");
                }
            }
        }

        if let Some(backdrop) = self.page.first_visible(&[BACKDROPS]) {
            if let Err(err) = backdrop.click() {
                debug!("dashboard.dismiss_any_modal: backdrop click failed: {err:#}");
            }
        }

        self.page.settle(self.config.timeouts.settle);
    }

    /// Open the account menu, clearing overlays first. Falls back to a
    /// DOM-level click when the trigger click is intercepted.
    fn open_profile_menu(&self) -> Result<()> {
        let t = &self.config.timeouts;

        self.page
            .wait_first_visible(PROFILE_TRIGGER, t.trigger, "profile trigger")?;
        self.dismiss_any_modal();

        // Re-resolve after cleanup; the DOM may have shifted under us.
        let trigger = self
            .page
            .wait_first_visible(PROFILE_TRIGGER, t.trigger, "profile trigger")?;
        if let Err(err) = trigger.click() {
            debug!("dashboard.open_profile_menu: trigger click intercepted: {err:#}");
            self.page.js_click(&trigger).map_err(|_| {
                E2eError::Assertion("profile trigger has no clickable dom node".into())
            })?;
        }

        self.page
            .wait_first_visible(USER_MENU, t.menu, "account menu")?;
        Ok(())
    }

    /// Open the account menu and click the logout control, then verify the
    /// session returns to the login page.
    ///
    /// Candidates are tried once each in priority order; the first one that
    /// becomes clickable wins.
    pub fn logout(&self) -> Result<()> {
        let t = &self.config.timeouts;
        self.open_profile_menu()?;

        let mut clicked = false;
        for query in LOGOUT_CANDIDATES {
            if self.page.find_all(query).is_empty() {
                continue;
            }
            match self
                .page
                .wait_first_visible(&[*query], t.action, "logout control")
            {
                Ok(item) => match item.click() {
                    Ok(_) => {
                        clicked = true;
                        break;
                    }
                    Err(err) => debug!("dashboard.logout: candidate click failed: {err:#}"),
                },
                Err(err) => debug!("dashboard.logout: candidate never visible: {err:#}"),
            }
        }
        if !clicked {
            return Err(
                E2eError::Assertion("logout control not found in the opened menu".into()).into(),
            );
        }

        self.page
            .wait_for_url(login_url_re(), t.page, "login url after logout")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_pattern_tolerates_misspelling() {
        assert!(dashboard_url_re().is_match("https://v2.zenclass.in/dashboard"));
        assert!(dashboard_url_re().is_match("https://v2.zenclass.in/dashbooard"));
        assert!(dashboard_url_re().is_match("/DASHBOARD"));
        assert!(!dashboard_url_re().is_match("/login"));
    }

    #[test]
    fn test_login_pattern_is_case_insensitive() {
        assert!(login_url_re().is_match("https://v2.zenclass.in/LOGIN"));
        assert!(login_url_re().is_match("https://v2.zenclass.in/login?next=/dashboard"));
        assert!(!login_url_re().is_match("https://v2.zenclass.in/dashboard"));
    }
}
