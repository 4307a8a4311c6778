//! Core authentication client logic, independent of the UI framework

pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
pub mod liveness;
pub mod otp;
pub mod password;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod storage;
pub mod theme;
pub mod validation;
#[cfg(test)]
mod tests;

pub use liveness::Liveness;
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{Theme, ThemeStore};
