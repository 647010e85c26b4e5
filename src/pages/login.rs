//! Page object for the credential-submission form.

use anyhow::Result;

use crate::browser::Page;
use crate::config::Config;
use crate::selector::Query;

pub const EMAIL_INPUT: Query = Query::Css("input[placeholder='Enter your mail']");
pub const PASSWORD_INPUT: Query = Query::Css("input[placeholder='Enter your password']");
pub const SUBMIT_BUTTON: Query = Query::Css("button[type='submit']");

pub struct LoginPage<'a> {
    page: &'a Page,
    config: &'a Config,
}

impl<'a> LoginPage<'a> {
    pub fn new(page: &'a Page, config: &'a Config) -> Self {
        Self { page, config }
    }

    /// Open the login page, waiting for navigation only.
    pub fn visit(&self) -> Result<()> {
        self.page.goto(&self.config.login_url())
    }

    /// Fill both fields and submit. Success is judged by the caller
    /// observing the resulting URL and state.
    pub fn login(&self, email: &str, password: &str) -> Result<()> {
        let t = &self.config.timeouts;

        let field = self
            .page
            .wait_first_visible(&[EMAIL_INPUT], t.field, "email input")?;
        self.page.type_into(&field, email)?;

        let field = self
            .page
            .wait_first_visible(&[PASSWORD_INPUT], t.field, "password input")?;
        self.page.type_into(&field, password)?;

        let submit = self
            .page
            .wait_enabled(&SUBMIT_BUTTON, t.field, "submit button")?;
        submit.click()?;
        Ok(())
    }
}
