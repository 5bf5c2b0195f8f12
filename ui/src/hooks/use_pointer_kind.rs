//=============================================================================
// File: src/hooks/use_pointer_kind.rs
//=============================================================================

// Which kind of pointer drives the desktop decides how icons open:
// mice select on click and open on double click, touch opens on tap.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(feature = "dioxus-desktop")]
pub use self::desktop::*;

#[cfg(any(target_os = "android", target_os = "ios"))]
pub use self::mobile::*;

#[cfg(all(
    not(target_arch = "wasm32"),
    not(feature = "dioxus-desktop"),
    not(any(target_os = "android", target_os = "ios"))
))]
pub use self::fallback::*;

/// The primary input device of the current platform.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

impl PointerKind {
    fn from_touch_points(points: i64) -> Self {
        if points > 0 {
            Self::Touch
        } else {
            Self::Mouse
        }
    }
}

/// # Desktop Implementation
/// Asks the webview's navigator, since a desktop window may still run on a touchscreen.
#[cfg(feature = "dioxus-desktop")]
mod desktop {
    use super::PointerKind;
    use dioxus::prelude::*;
    use dioxus_desktop::use_window;
    use serde_json::Value;

    pub fn use_pointer_kind() -> Signal<PointerKind> {
        let mut pointer = use_signal(PointerKind::default);
        let window = use_window();

        use_effect(move || {
            let window = window.clone();
            spawn(async move {
                let js_code = "return navigator.maxTouchPoints;";
                if let Ok(Ok(Value::Number(points))) =
                    window.webview.evaluate_script_with_return(js_code).await
                {
                    pointer.set(PointerKind::from_touch_points(
                        points.as_i64().unwrap_or_default(),
                    ));
                }
            });
        });

        pointer
    }
}

/// # WebAssembly (WASM) Implementation
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use super::PointerKind;
    use dioxus::prelude::*;

    pub fn use_pointer_kind() -> Signal<PointerKind> {
        let mut pointer = use_signal(PointerKind::default);

        use_effect(move || {
            if let Some(window) = web_sys::window() {
                let points = window.navigator().max_touch_points();
                pointer.set(PointerKind::from_touch_points(points.into()));
            }
        });

        pointer
    }
}

/// # Mobile Implementation
#[cfg(any(target_os = "android", target_os = "ios"))]
mod mobile {
    use super::PointerKind;
    use dioxus::prelude::*;

    pub fn use_pointer_kind() -> Signal<PointerKind> {
        use_signal(|| PointerKind::Touch)
    }
}

/// # Fallback/Server Implementation
#[cfg(all(
    not(target_arch = "wasm32"),
    not(feature = "dioxus-desktop"),
    not(any(target_os = "android", target_os = "ios"))
))]
mod fallback {
    use super::PointerKind;
    use dioxus::prelude::*;

    pub fn use_pointer_kind() -> Signal<PointerKind> {
        use_signal(PointerKind::default)
    }
}

#[cfg(test)]
mod tests {
    use super::PointerKind;

    #[test]
    fn touch_points_pick_touch() {
        assert!(PointerKind::from_touch_points(0).is_mouse());
        assert!(PointerKind::from_touch_points(5).is_touch());
    }
}
