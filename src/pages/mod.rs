//! Page objects for the flows under test.

mod dashboard;
mod login;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
