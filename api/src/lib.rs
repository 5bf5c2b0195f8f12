//! This crate contains the shared site data and fullstack server functions.

pub mod icon_color;
pub mod icons;
pub mod prefs;

use dioxus::prelude::*;
use icons::DesktopIconConfig;
use prefs::site_prefs::SitePrefs;

pub type ApiError = anyhow::Error;

/// Retrieves the site preferences.
///
/// These are read from env vars on the server, so the same build can be
/// re-titled per deployment.
#[post("/api/get_site_prefs")]
pub async fn get_site_prefs() -> Result<SitePrefs, ApiError> {
    Ok(SitePrefs::default())
}

/// Retrieves the icons for the desktop home screen.
#[post("/api/desktop_icons")]
pub async fn desktop_icons() -> Result<Vec<DesktopIconConfig>, ApiError> {
    let initial = icons::INITIAL_ICONS.clone();
    dioxus_logger::tracing::debug!("serving {} desktop icons", initial.len());
    Ok(initial)
}
