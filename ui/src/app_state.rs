use api::icons::DesktopIconConfig;
use api::prefs::site_prefs::SitePrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: SitePrefs,
    pub icons: Vec<DesktopIconConfig>,
}

/// The immutable data the site was loaded with.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: SitePrefs, icons: Vec<DesktopIconConfig>) -> Self {
        Self(Arc::new(AppStateData { prefs, icons }))
    }

    pub fn icon(&self, id: &str) -> Option<&DesktopIconConfig> {
        self.icons.iter().find(|icon| icon.id == id)
    }
}
