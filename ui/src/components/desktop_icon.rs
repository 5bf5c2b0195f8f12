use api::icons::DesktopIconConfig;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use crate::hooks::use_pointer_kind::PointerKind;

#[derive(Props, PartialEq, Clone)]
pub struct DesktopIconProps {
    pub icon: DesktopIconConfig,
    pub selected: bool,
    pub pointer: PointerKind,
    /// Images are only rendered once the client is running, so that every
    /// load event is observed.
    pub show_image: bool,
    pub on_select: EventHandler<String>,
    pub on_open: EventHandler<DesktopIconConfig>,
    /// Fired once the image has either loaded or failed.
    pub on_image_settled: EventHandler<()>,
}

/// One icon on the desktop grid.
///
/// A mouse click selects and a double click opens. A tap opens directly.
#[component]
pub fn DesktopIcon(props: DesktopIconProps) -> Element {
    let DesktopIconProps {
        icon,
        selected,
        pointer,
        show_image,
        on_select,
        on_open,
        on_image_settled,
    } = props;

    let class = if selected {
        "desktop-icon selected"
    } else {
        "desktop-icon"
    };
    // css grid lines are 1-based
    let grid_area = format!("grid-column: {}; grid-row: {};", icon.col + 1, icon.row + 1);

    let on_click = {
        let icon = icon.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            if pointer.is_touch() {
                on_open.call(icon.clone());
            } else {
                on_select.call(icon.id.clone());
            }
        }
    };
    let on_double_click = {
        let icon = icon.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            on_open.call(icon.clone());
        }
    };
    let on_key_down = {
        let icon = icon.clone();
        move |evt: KeyboardEvent| {
            if evt.key() == Key::Enter {
                evt.prevent_default();
                on_open.call(icon.clone());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            style: "{grid_area}",
            title: "{icon.label}",
            "aria-pressed": if selected { "true" } else { "false" },
            onclick: on_click,
            ondoubleclick: on_double_click,
            onkeydown: on_key_down,
            if show_image {
                img {
                    class: "desktop-icon-image",
                    src: "{icon.image}",
                    alt: "",
                    draggable: "false",
                    onload: move |_| on_image_settled.call(()),
                    onerror: move |_| on_image_settled.call(()),
                }
            } else {
                div { class: "desktop-icon-image placeholder" }
            }
            span {
                class: "desktop-icon-label",
                "{icon.label}"
            }
        }
    }
}
