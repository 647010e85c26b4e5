use zenclass_e2e::pages::{DashboardPage, LoginPage};
use zenclass_e2e::selector::Query;
use zenclass_e2e::support;

// Exact placeholders first, looser fallbacks second.
const EMAIL_CANDIDATES: &[Query] = &[
    Query::Css("input[placeholder='Enter your mail']"),
    Query::Css("input[placeholder*='mail' i], input[placeholder*='email' i]"),
];
const PASSWORD_CANDIDATES: &[Query] = &[
    Query::Css("input[placeholder='Enter your password']"),
    Query::Css("input[placeholder*='password' i]"),
];
const SUBMIT_BUTTON: Query = Query::Css("button[type='submit'], input[type='submit']");

const ERROR_BANNER: &[Query] = &[Query::Text {
    css: "div, span, p",
    needle: "invalid",
}];

#[test]
fn test_login_form_renders_and_accepts_input() {
    let Some((_browser, page, config)) = support::live_session() else {
        return;
    };
    let login = LoginPage::new(&page, &config);
    login.visit().expect("Failed to open login page");

    let t = &config.timeouts;

    let email = page
        .wait_first_visible(EMAIL_CANDIDATES, t.field, "email input")
        .expect("Email input should be visible");
    page.type_into(&email, "dummy@example.com")
        .expect("Failed to type into email input");
    assert_eq!(
        page.input_value(&email).expect("Failed to read email value"),
        "dummy@example.com",
        "Email box should accept input"
    );

    let password = page
        .wait_first_visible(PASSWORD_CANDIDATES, t.field, "password input")
        .expect("Password input should be visible");
    page.type_into(&password, "DummyPass123!")
        .expect("Failed to type into password input");
    assert_eq!(
        page.input_value(&password)
            .expect("Failed to read password value"),
        "DummyPass123!",
        "Password box should accept input"
    );

    page.wait_enabled(&SUBMIT_BUTTON, t.field, "submit button")
        .expect("Submit button should be visible and enabled");
}

#[test]
fn test_login_with_invalid_credentials_stays_on_login() {
    let Some((_browser, page, config)) = support::live_session() else {
        return;
    };
    let login = LoginPage::new(&page, &config);
    login.visit().expect("Failed to open login page");
    login
        .login("wronguser@gmail.com", "WrongPassword123")
        .expect("Failed to submit credentials");

    page.wait_first_visible(ERROR_BANNER, config.timeouts.error_banner, "error banner")
        .expect("Error message should be shown for invalid login");
    assert!(
        page.url().to_lowercase().contains("/login"),
        "Should remain on login page with invalid credentials"
    );
}

#[test]
fn test_login_with_valid_credentials_reaches_dashboard() {
    let Some((_browser, page, config)) = support::live_session() else {
        return;
    };
    let login = LoginPage::new(&page, &config);
    login.visit().expect("Failed to open login page");
    login
        .login(&config.email, &config.password)
        .expect("Failed to submit credentials");

    let dashboard = DashboardPage::new(&page, &config);
    dashboard
        .wait_loaded(config.timeouts.page)
        .expect("Dashboard did not load after login");
    assert!(
        page.url().to_lowercase().contains("/dashboard"),
        "Should redirect to dashboard after successful login"
    );
    assert!(
        dashboard.is_logged_in(),
        "Probe should report logged in from the dashboard"
    );
}
