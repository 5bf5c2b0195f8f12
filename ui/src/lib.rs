// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
pub mod loading;
mod screens;

use app_state::AppState;
use components::chrome::Button;
use components::empty_state::EmptyState;
use components::loading_indicator::LoadingIndicator;
use hooks::use_loading::use_loading_provider;
use hooks::use_loading::use_loading_tracker;
use screens::desktop::DesktopScreen;
use screens::icon_window::IconWindowScreen;

/// Enum to represent the different screens of the site.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Screen {
    /// The home screen with its icon grid.
    #[default]
    Desktop,
    /// The window of a link-less desktop icon, by icon id.
    Icon(String),
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Desktop => "Desktop",
            Screen::Icon(_) => "Window",
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let site_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        overflow: hidden;
        font-family: Inter, "Segoe UI", Arial, sans-serif;
        color: #f4f6fb;
        background-color: #11141c;
    }

    /* --- LOADING BAR --- */
    .loading-bar {
        position: fixed;
        top: 0; left: 0; right: 0;
        height: 3px;
        z-index: 1000;
        opacity: 1;
        transition: opacity 200ms ease-out;
        pointer-events: none;
    }
    .loading-bar.hidden { opacity: 0; }
    .loading-bar-fill {
        height: 100%;
        background-color: #4cc9f0;
        box-shadow: 0 0 8px #4cc9f0;
        transition: width 150ms ease-out;
    }
    .loading-bar.indeterminate .loading-bar-fill {
        background: repeating-linear-gradient(
            -45deg,
            #4cc9f0 0 12px,
            color-mix(in srgb, #4cc9f0, transparent 60%) 12px 24px
        );
        background-size: 34px 100%;
        animation: loading-stripes 600ms linear infinite;
    }
    @keyframes loading-stripes {
        from { background-position: 0 0; }
        to { background-position: 34px 0; }
    }

    /* --- APP FRAME --- */
    .app-main-container {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        background-color: var(--desktop-background);
    }

    .menu-bar {
        flex-shrink: 0;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.4rem 1rem;
        font-size: 0.9rem;
        background-color: rgba(0, 0, 0, 0.35);
        backdrop-filter: blur(6px);
    }
    .menu-bar-title { font-weight: 600; }
    .menu-bar-screen { opacity: 0.7; }

    .app-main-container .content {
        flex: 1;
        display: flex;
        flex-direction: column;
        overflow: auto;
        min-height: 0;
        padding: 1.5rem;
    }

    /* --- DESKTOP --- */
    .desktop {
        flex: 1;
        display: grid;
        grid-template-columns: repeat(auto-fill, 112px);
        grid-auto-rows: 120px;
        gap: 0.5rem;
        align-content: start;
    }
    .desktop-icon {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.35rem;
        padding: 0.5rem;
        border: 1px solid transparent;
        border-radius: 10px;
        background: none;
        color: inherit;
        cursor: default;
        user-select: none;
    }
    .desktop-icon:focus-visible { outline: 2px solid #4cc9f0; }
    .desktop-icon.selected {
        background-color: rgba(76, 201, 240, 0.18);
        border-color: rgba(76, 201, 240, 0.45);
    }
    .desktop-icon-image { width: 64px; height: 64px; }
    .desktop-icon-image.placeholder {
        border-radius: 12px;
        background-color: rgba(255, 255, 255, 0.08);
    }
    .desktop-icon-label {
        font-size: 0.85rem;
        text-align: center;
        text-shadow: 0 1px 2px rgba(0, 0, 0, 0.8);
    }

    /* --- WINDOWS --- */
    .window {
        align-self: center;
        width: min(640px, 100%);
        border-radius: 12px;
        overflow: hidden;
        background-color: #1f2433;
        box-shadow: 0 10px 40px rgba(0, 0, 0, 0.45);
    }
    .window:focus { outline: none; }
    .window-title-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.5rem 1rem;
        background-color: #2a3044;
    }
    .window-title-bar h3 { margin: 0; font-size: 1rem; }
    .window-close { color: inherit; text-decoration: none; font-size: 1.25rem; }
    .window-body { padding: 1rem; }

    .chrome-button {
        padding: 0.45rem 1rem;
        border: none;
        border-radius: 8px;
        color: #11141c;
        background-color: #4cc9f0;
        cursor: pointer;
    }
    .chrome-button.secondary {
        color: inherit;
        background-color: rgba(255, 255, 255, 0.12);
    }

    /* --- EMPTY STATE --- */
    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 2rem;
        text-align: center;
        opacity: 0.85;
        border: 2px dashed rgba(255, 255, 255, 0.15);
        border-radius: 12px;
    }
    .empty-state-icon { width: 20vmin; height: 20vmin; margin-bottom: 1rem; }
    .empty-state-image { width: 100%; height: 100%; }
    .empty-state h4 { margin-bottom: 0.5rem; }
    .empty-state p { max-width: 400px; margin: 0 auto 1.5rem auto; }
"#;

    use_loading_provider();

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{site_css}"
        }
        LoadingIndicator {}
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let mut initial_data_future = use_server_future(move || async move {
        // call the server apis concurrently
        let (prefs_result, icons_result) =
            tokio::join!(api::get_site_prefs(), api::desktop_icons());

        let prefs = prefs_result.map_err(|e| e.to_string())?;
        let icons = icons_result.map_err(|e| e.to_string())?;

        dioxus_logger::tracing::info!("prefs: {:#?}, {} icons", prefs, icons.len());

        Ok::<_, String>((prefs, icons))
    })?;

    // Read from the single future to ensure it's polled during SSR.
    let body = match &*initial_data_future.read() {
        Some(Ok((prefs, icons))) => {
            rsx! {
                LoadedApp {
                    app_state: AppState::new(prefs.clone(), icons.clone()),
                }
            }
        }
        Some(Err(e)) => rsx! {
            LoadFailed {
                message: e.clone(),
                on_retry: move |_| initial_data_future.restart(),
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// Shown when the initial data could not be fetched.
#[component]
fn LoadFailed(message: String, on_retry: EventHandler<MouseEvent>) -> Element {
    let tracker = use_loading_tracker();
    // nothing else will finish the page load
    use_effect(move || tracker.resolve_bootstrap());

    rsx! {
        EmptyState {
            title: "Something went wrong".to_string(),
            description: Some(format!("An error occurred: {message}")),
            primary_action: rsx! {
                Button {
                    on_click: move |evt| on_retry.call(evt),
                    "Retry"
                }
            },
        }
    }
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let tracker = use_loading_tracker();
    use_effect(move || tracker.resolve_bootstrap());

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    let title = app_state.prefs.title();
    let background = app_state.prefs.background();

    rsx! {
        document::Title { "{title}" }
        div {
            class: "app-main-container",
            style: "--desktop-background: {background};",
            header {
                class: "menu-bar",
                span {
                    class: "menu-bar-title",
                    "{title}"
                }
                span {
                    class: "menu-bar-screen",
                    "{active_screen.read().name()}"
                }
            }
            div {
                class: "content",
                match active_screen() {
                    Screen::Desktop => rsx! {
                        DesktopScreen {}
                    },
                    Screen::Icon(icon_id) => rsx! {
                        IconWindowScreen {
                            key: "{icon_id}",
                            icon_id,
                        }
                    },
                }
            }
        }
    }
}
