//! Browser end-to-end suite for the ZenClass login, session, and logout
//! flows.
//!
//! Page objects ([`pages::LoginPage`], [`pages::DashboardPage`]) wrap a
//! synchronous CDP session ([`browser::Page`]); the scenarios live in
//! `tests/` and skip gracefully when no live target is configured.

pub mod browser;
pub mod config;
pub mod error;
pub mod pages;
pub mod selector;
pub mod support;
