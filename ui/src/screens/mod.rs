// This file makes the screen modules available to the rest of the application.

pub mod desktop;
pub mod icon_window;

use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::hooks::use_loading::use_loading_tracker;
use crate::loading::LoadingTracker;
use crate::Screen;

/// Switches the active screen.
///
/// Loaders belong to the screen that started them, so switching aborts them all.
#[derive(Clone, PartialEq)]
pub struct ScreenNav {
    active: Signal<Screen>,
    loading: LoadingTracker,
}

impl ScreenNav {
    pub fn go(&self, screen: Screen) {
        if *self.active.peek() == screen {
            return;
        }
        info!("navigating to {}", screen.name());
        self.loading.reset_loading();
        let mut active = self.active;
        active.set(screen);
    }
}

pub fn use_screen_nav() -> ScreenNav {
    ScreenNav {
        active: use_context::<Signal<Screen>>(),
        loading: use_loading_tracker(),
    }
}
