//=============================================================================
// File: src/components/loading_indicator.rs
//=============================================================================
use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;
use crate::hooks::use_loading::use_loading_state;

/// How long a finished bar stays at 100% before fading out.
const LINGER: Duration = Duration::from_millis(300);

/// The global progress bar pinned to the top of the page.
///
/// Striped while something is loading with no reported progress yet,
/// filled to the aggregate progress otherwise.
#[component]
pub fn LoadingIndicator() -> Element {
    let state = use_loading_state();
    let mut visible = use_signal(move || state.peek().active);

    use_effect(move || {
        if state.read().active {
            visible.set(true);
        } else if *visible.peek() {
            spawn(async move {
                compat::sleep(LINGER).await;
                // a new loader may have started while lingering
                if !state.peek().active {
                    visible.set(false);
                }
            });
        }
    });

    let current = state();
    let indeterminate = current.active && current.progress == 0.0;
    let percent = if current.active { current.percent() } else { 100 };

    let class = if !visible() {
        "loading-bar hidden"
    } else if indeterminate {
        "loading-bar indeterminate"
    } else {
        "loading-bar"
    };
    let width = if indeterminate { 100 } else { percent };

    rsx! {
        div {
            class: "{class}",
            role: "progressbar",
            "aria-label": "Page loading",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": if !indeterminate { "{percent}" },
            "aria-hidden": if !visible() { "true" },
            div {
                class: "loading-bar-fill",
                style: "width: {width}%;",
            }
        }
    }
}
