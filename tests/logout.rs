use zenclass_e2e::pages::{DashboardPage, LoginPage};
use zenclass_e2e::support;

#[test]
fn test_probe_is_false_on_login_page() {
    let Some((_browser, page, config)) = support::live_session() else {
        return;
    };
    LoginPage::new(&page, &config)
        .visit()
        .expect("Failed to open login page");

    let dashboard = DashboardPage::new(&page, &config);
    assert!(
        !dashboard.is_logged_in(),
        "Probe should be false on the login page"
    );
}

#[test]
fn test_modal_dismissal_without_overlay_is_harmless() {
    let Some((_browser, page, config)) = support::live_session() else {
        return;
    };
    LoginPage::new(&page, &config)
        .visit()
        .expect("Failed to open login page");

    // Nothing to dismiss; both calls must return without raising.
    let dashboard = DashboardPage::new(&page, &config);
    dashboard.dismiss_any_modal();
    dashboard.dismiss_any_modal();
}

#[test]
fn test_logout_returns_to_login() {
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

    dashboard.logout().expect("Logout flow failed");
    assert!(
        page.url().to_lowercase().contains("/login"),
        "Should return to login page after logout"
    );
}
