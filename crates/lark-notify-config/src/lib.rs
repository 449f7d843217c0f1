//! Environment configuration for lark-notify.
//!
//! Drone passes plugin settings as `PLUGIN_*` variables and build metadata as
//! `DRONE_*` variables. This crate turns them into a [`NotifyConfig`].

pub mod env;
pub mod error;
pub mod vars;

pub use env::{NotifyConfig, env_lookup, load};
pub use error::{ConfigError, ConfigResult};
