use dioxus::prelude::*;

use crate::loading::Loader;
use crate::loading::LoadingState;
use crate::loading::LoadingTracker;

/// Creates the application's `LoadingTracker` and provides it, together with a
/// reactive mirror of its state, as context.
///
/// Call this once, in the root component.
pub fn use_loading_provider() -> LoadingTracker {
    let tracker = use_context_provider(LoadingTracker::new);
    let initial = tracker.state();
    let state = use_signal(move || initial);
    use_context_provider(|| state);

    let subscription = use_hook({
        let tracker = tracker.clone();
        move || {
            tracker.subscribe(move |next| {
                let mut state = state;
                // peek: never subscribe the publishing scope to the signal
                if *state.peek() != *next {
                    state.set(*next);
                }
            })
        }
    });

    use_drop({
        let tracker = tracker.clone();
        move || {
            tracker.unsubscribe(subscription);
        }
    });

    tracker
}

pub fn use_loading_tracker() -> LoadingTracker {
    use_context::<LoadingTracker>()
}

/// The published loading state. Reading it subscribes the component.
pub fn use_loading_state() -> Signal<LoadingState> {
    use_context::<Signal<LoadingState>>()
}

/// A loader owned by the calling component.
///
/// It begins after the component first renders on the client and ends when
/// the component is dropped. It can be ended earlier through the returned handle.
pub fn use_loader(id: &str) -> Loader {
    let tracker = use_loading_tracker();
    let loader = use_hook(|| tracker.loader(id));

    use_effect({
        let loader = loader.clone();
        move || loader.begin()
    });

    use_drop({
        let loader = loader.clone();
        move || loader.end()
    });

    loader
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;

    /// Hands what the root created back to the test.
    #[derive(Clone, Default)]
    struct Handles {
        tracker: Rc<RefCell<Option<LoadingTracker>>>,
        state: Rc<RefCell<Option<Signal<LoadingState>>>>,
        renders: Rc<Cell<usize>>,
    }

    impl Handles {
        fn tracker(&self) -> LoadingTracker {
            self.tracker.borrow().clone().expect("root has rendered")
        }

        fn state(&self) -> Signal<LoadingState> {
            self.state.borrow().expect("watcher has rendered")
        }
    }

    #[allow(non_snake_case)]
    fn Root() -> Element {
        let tracker = use_loading_provider();
        let handles = use_context::<Handles>();
        handles.tracker.replace(Some(tracker));

        rsx! {
            Watcher {}
            Page {}
        }
    }

    #[component]
    fn Watcher() -> Element {
        let state = use_loading_state();
        let handles = use_context::<Handles>();
        handles.state.replace(Some(state));
        handles.renders.set(handles.renders.get() + 1);

        let LoadingState { active, progress } = state();
        rsx! {
            p { "{active} {progress}" }
        }
    }

    #[component]
    fn Page() -> Element {
        use_loader("page");
        rsx! {
            div {}
        }
    }

    fn mount(handles: &Handles) -> VirtualDom {
        let mut dom = VirtualDom::new(Root).with_root_context(handles.clone());
        dom.rebuild_in_place();
        dom.render_immediate(&mut NoOpMutations);
        dom
    }

    fn settle(dom: &mut VirtualDom) {
        dom.process_events();
        dom.render_immediate(&mut NoOpMutations);
    }

    #[test]
    fn loader_lives_as_long_as_its_component() {
        let handles = Handles::default();
        let dom = mount(&handles);
        let tracker = handles.tracker();

        assert!(tracker.is_registered("page"));
        assert_eq!(tracker.subscriber_count(), 1);
        assert_eq!(
            tracker.state(),
            LoadingState {
                active: true,
                progress: 0.0
            }
        );

        drop(dom);

        assert!(!tracker.is_registered("page"));
        assert_eq!(tracker.subscriber_count(), 0);
        assert_eq!(tracker.state(), LoadingState::IDLE);
    }

    #[test]
    fn signal_mirrors_tracker_state() {
        let handles = Handles::default();
        let mut dom = mount(&handles);
        let tracker = handles.tracker();
        let state = handles.state();

        dom.in_runtime(|| tracker.set_loading_progress("page", 0.5));
        settle(&mut dom);

        let mirrored = dom.in_runtime(|| *state.peek());
        assert_eq!(mirrored, tracker.state());
        assert_eq!(mirrored.progress, 0.5);
    }

    #[test]
    fn identical_republish_does_not_rerender() {
        let handles = Handles::default();
        let mut dom = mount(&handles);
        let tracker = handles.tracker();
        settle(&mut dom);
        let renders = handles.renders.get();

        // republishes the current state
        dom.in_runtime(|| tracker.end_loading("never-registered"));
        settle(&mut dom);

        assert_eq!(handles.renders.get(), renders);
    }
}
