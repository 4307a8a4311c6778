pub mod api;
pub mod auth;
pub mod browser;
pub mod common;
pub mod icon;
pub mod pages;
pub mod theme;

pub use icon::{Icon, icons};
pub use theme::{ThemeContext, ThemeToggle, provide_theme_context, use_theme_context};
