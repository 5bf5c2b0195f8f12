//! Reusable, lifetime-free Dioxus components for the desktop look and feel.
//! The matching styles live in the root stylesheet in `lib.rs`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "chrome-button",
            ButtonType::Secondary => "chrome-button secondary",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    disabled: bool,
}

/// A plain push button.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.button_type.to_class(),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

//=============================================================================
// Layout Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct WindowProps {
    title: String,
    on_close: EventHandler<()>,
    children: Element,
}

/// A desktop window with a title bar. Closes on the title bar button or Escape.
pub fn Window(props: WindowProps) -> Element {
    let on_close = props.on_close;
    rsx! {
        section {
            class: "window",
            role: "dialog",
            "aria-label": "{props.title}",
            tabindex: "-1",
            autofocus: true,
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            header {
                class: "window-title-bar",
                h3 { "{props.title}" }
                a {
                    href: "#",
                    "aria-label": "Close",
                    class: "window-close",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_close.call(());
                    },
                    "×"
                }
            }
            div {
                class: "window-body",
                {props.children}
            }
        }
    }
}
