//! `stockroom` command-line front end: configuration and the interactive menu.

pub mod config;
pub mod menu;

pub use config::Config;
pub use menu::Menu;
