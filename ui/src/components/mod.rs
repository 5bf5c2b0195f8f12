//! The components module contains all shared components for the site.
pub mod chrome;
pub mod desktop_icon;
pub mod empty_state;
pub mod loading_indicator;
