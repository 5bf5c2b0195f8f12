//=============================================================================
// File: src/screens/desktop.rs
//=============================================================================
use api::icons::DesktopIconConfig;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::components::desktop_icon::DesktopIcon;
use crate::components::empty_state::EmptyState;
use crate::hooks::use_loading::use_loader;
use crate::hooks::use_pointer_kind::use_pointer_kind;
use crate::screens::use_screen_nav;
use crate::AppState;
use crate::Screen;

/// Loader id for decoding the icon images of the desktop.
const ICON_IMAGES_LOADER: &str = "desktop-icon-images";

/// Opens an external link: web pages in a new tab, `mailto:` in place.
fn open_link(href: &str) {
    let target = match serde_json::to_string(href) {
        Ok(quoted) => quoted,
        Err(e) => {
            warn!("cannot open link {:?}: {}", href, e);
            return;
        }
    };
    let js = if href.starts_with("mailto:") {
        format!("window.location.href = {target};")
    } else {
        format!("window.open({target}, '_blank', 'noopener');")
    };
    // the script returns nothing, so the eval handle is not awaited
    let _ = document::eval(&js);
}

/// Progress of the icon image loader after `done` of `total` images settled.
///
/// `None` once every image has loaded or failed, meaning the loader is finished.
fn image_progress(done: usize, total: usize) -> Option<f64> {
    if done >= total {
        None
    } else {
        Some(done as f64 / total as f64)
    }
}

#[component]
pub fn DesktopScreen() -> Element {
    let app_state = use_context::<AppState>();
    let nav = use_screen_nav();
    let pointer = use_pointer_kind();
    let mut selected = use_signal(|| None::<String>);

    let total = app_state.icons.len();
    let images = use_loader(ICON_IMAGES_LOADER);
    let mut settled = use_signal(|| 0usize);
    let mut mounted = use_signal(|| false);

    // effects never run during server rendering, so images only appear on the client
    use_effect(move || mounted.set(true));

    use_effect(move || {
        match image_progress(settled(), total) {
            Some(progress) => images.set_progress(progress),
            None => images.end(),
        }
    });

    let on_select = use_callback(move |id: String| selected.set(Some(id)));
    let on_open = use_callback(move |icon: DesktopIconConfig| match icon.href {
        Some(href) => open_link(&href),
        None => nav.go(Screen::Icon(icon.id)),
    });
    let on_image_settled = use_callback(move |_: ()| *settled.write() += 1);

    if app_state.icons.is_empty() {
        return rsx! {
            EmptyState {
                title: "The desktop is empty".to_string(),
                description: Some("No icons have been configured.".to_string()),
            }
        };
    }

    let icons_with_selection = app_state.icons.iter().cloned().map(|icon| {
        let is_selected = selected.read().as_deref() == Some(icon.id.as_str());
        (icon, is_selected)
    });

    rsx! {
        div {
            class: "desktop",
            onclick: move |_| selected.set(None),
            for (icon, is_selected) in icons_with_selection {
                DesktopIcon {
                    key: "{icon.id}",
                    selected: is_selected,
                    icon,
                    pointer: pointer(),
                    show_image: mounted(),
                    on_select,
                    on_open,
                    on_image_settled,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::image_progress;

    #[test]
    fn progress_is_settled_share_of_images() {
        assert_eq!(image_progress(0, 4), Some(0.0));
        assert_eq!(image_progress(1, 4), Some(0.25));
        assert_eq!(image_progress(3, 4), Some(0.75));
    }

    #[test]
    fn finished_once_every_image_settled() {
        assert_eq!(image_progress(4, 4), None);
        // late load events after the loader ended
        assert_eq!(image_progress(5, 4), None);
    }

    #[test]
    fn no_images_finishes_immediately() {
        assert_eq!(image_progress(0, 0), None);
    }
}
