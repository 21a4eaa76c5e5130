//! GUI-side services

pub mod config;

pub use config::GuiConfig;
