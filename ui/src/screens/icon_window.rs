//=============================================================================
// File: src/screens/icon_window.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::chrome::Button;
use crate::components::chrome::ButtonType;
use crate::components::chrome::Window;
use crate::components::empty_state::EmptyState;
use crate::screens::use_screen_nav;
use crate::AppState;
use crate::Screen;

/// The window opened by a desktop icon that has no link of its own.
#[component]
pub fn IconWindowScreen(icon_id: String) -> Element {
    let app_state = use_context::<AppState>();
    let nav = use_screen_nav();

    let close = {
        let nav = nav.clone();
        move |_: ()| nav.go(Screen::Desktop)
    };
    let back = move |_: MouseEvent| nav.go(Screen::Desktop);

    let Some(icon) = app_state.icon(&icon_id).cloned() else {
        return rsx! {
            Window {
                title: "Not found".to_string(),
                on_close: close,
                EmptyState {
                    title: "This window no longer exists".to_string(),
                    description: Some(format!("There is no desktop icon called {icon_id:?}.")),
                }
            }
        };
    };

    rsx! {
        Window {
            title: icon.label.clone(),
            on_close: close,
            EmptyState {
                title: format!("{} is coming soon", icon.label),
                description: Some("Check back later for more.".to_string()),
                icon: rsx! {
                    img {
                        class: "empty-state-image",
                        src: "{icon.image}",
                        alt: "",
                    }
                },
                primary_action: rsx! {
                    Button {
                        button_type: ButtonType::Secondary,
                        on_click: back,
                        "Back to desktop"
                    }
                },
            }
        }
    }
}
