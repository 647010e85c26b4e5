//! Thin wrappers around the CDP driver: a launched Chrome process and one
//! page session per scenario. All waits are bounded polling loops; the
//! deadline is always explicit at the call site.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, Element, LaunchOptions, Tab};
use regex::Regex;

use crate::error::E2eError;
use crate::selector::{text_matches, Query};

/// Geometry plus computed style, evaluated on the element itself.
const JS_IS_VISIBLE: &str = r#"
function() {
    const rect = this.getBoundingClientRect();
    const style = window.getComputedStyle(this);
    return rect.width > 0 && rect.height > 0
        && style.visibility !== 'hidden' && style.display !== 'none';
}"#;

const JS_IS_ENABLED: &str = "function() { return !this.disabled; }";
const JS_CLICK: &str = "function() { this.click(); }";
const JS_VALUE: &str = "function() { return this.value; }";

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch(headless: bool) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(headless)
            .build()
            .expect("Failed to build launch options");

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page {
            tab,
            poll: Duration::from_millis(100),
        })
    }
}

pub struct Page {
    tab: Arc<Tab>,
    poll: Duration,
}

impl Page {
    pub fn set_poll(&mut self, poll: Duration) {
        self.poll = poll;
    }

    /// Navigate and wait for the navigation itself, not the full load.
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn url(&self) -> String {
        self.tab.get_url()
    }

    /// Poll until the current URL matches `pattern`.
    pub fn wait_for_url(&self, pattern: &Regex, timeout: Duration, what: &str) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if pattern.is_match(&self.url()) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(E2eError::timeout(what, timeout).into());
            }
            thread::sleep(self.poll);
        }
    }

    /// Poll until the current URL no longer matches `pattern`.
    pub fn wait_for_url_cleared(
        &self,
        pattern: &Regex,
        timeout: Duration,
        what: &str,
    ) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if !pattern.is_match(&self.url()) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(E2eError::timeout(what, timeout).into());
            }
            thread::sleep(self.poll);
        }
    }

    pub fn press_key(&self, key: &str) -> Result<()> {
        self.tab.press_key(key)?;
        Ok(())
    }

    pub fn settle(&self, duration: Duration) {
        thread::sleep(duration);
    }

    /// Current matches for one candidate. Driver-level resolution failures
    /// count as "no match", so fallback chains keep moving.
    pub fn find_all(&self, query: &Query) -> Vec<Element<'_>> {
        match query {
            Query::Css(selector) => self.tab.find_elements(selector).unwrap_or_default(),
            Query::XPath(expression) => self
                .tab
                .find_elements_by_xpath(expression)
                .unwrap_or_default(),
            Query::Text { css, needle } => self
                .tab
                .find_elements(css)
                .unwrap_or_default()
                .into_iter()
                .filter(|el| {
                    el.get_inner_text()
                        .map(|text| text_matches(&text, needle))
                        .unwrap_or(false)
                })
                .collect(),
        }
    }

    pub fn is_visible(&self, element: &Element<'_>) -> bool {
        element
            .call_js_fn(JS_IS_VISIBLE, vec![], false)
            .map(|ro| matches!(ro.value, Some(serde_json::Value::Bool(true))))
            .unwrap_or(false)
    }

    /// First visible match across the candidate chain, in priority order.
    pub fn first_visible(&self, candidates: &[Query]) -> Option<Element<'_>> {
        for query in candidates {
            if let Some(el) = self
                .find_all(query)
                .into_iter()
                .find(|el| self.is_visible(el))
            {
                return Some(el);
            }
        }
        None
    }

    /// Poll the candidate chain until something is visible.
    pub fn wait_first_visible(
        &self,
        candidates: &[Query],
        timeout: Duration,
        what: &str,
    ) -> Result<Element<'_>> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(el) = self.first_visible(candidates) {
                return Ok(el);
            }
            if Instant::now() >= deadline {
                return Err(E2eError::timeout(what, timeout).into());
            }
            thread::sleep(self.poll);
        }
    }

    /// Poll until the first visible match also reports itself enabled.
    pub fn wait_enabled(&self, query: &Query, timeout: Duration, what: &str) -> Result<Element<'_>> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(el) = self
                .find_all(query)
                .into_iter()
                .find(|el| self.is_visible(el))
            {
                let enabled = el
                    .call_js_fn(JS_IS_ENABLED, vec![], false)
                    .map(|ro| matches!(ro.value, Some(serde_json::Value::Bool(true))))
                    .unwrap_or(false);
                if enabled {
                    return Ok(el);
                }
            }
            if Instant::now() >= deadline {
                return Err(E2eError::timeout(what, timeout).into());
            }
            thread::sleep(self.poll);
        }
    }

    /// Direct DOM click for elements whose standard click path is
    /// intercepted by an overlay.
    pub fn js_click(&self, element: &Element<'_>) -> Result<()> {
        element.call_js_fn(JS_CLICK, vec![], false)?;
        Ok(())
    }

    /// Focus the element, then type into it.
    pub fn type_into(&self, element: &Element<'_>, text: &str) -> Result<()> {
        element.click()?;
        element.type_into(text)?;
        Ok(())
    }

    pub fn input_value(&self, element: &Element<'_>) -> Result<String> {
        let ro = element.call_js_fn(JS_VALUE, vec![], false)?;
        match ro.value {
            Some(serde_json::Value::String(s)) => Ok(s),
            _ => Ok(String::new()),
        }
    }
}
