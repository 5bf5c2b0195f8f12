use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::trace;

use super::aggregator::LoadingAggregator;
use super::aggregator::LoadingState;
use super::observers::Observers;
use super::observers::SubscriptionId;

struct TrackerInner {
    aggregator: RefCell<LoadingAggregator>,
    observers: Observers<LoadingState>,
}

/// A shared handle to the application's loading state.
///
/// Create one in the composition root and hand clones to anything that
/// starts asynchronous work or displays progress. All clones observe and
/// mutate the same state. Single-threaded by construction (`!Send`).
#[derive(Clone)]
pub struct LoadingTracker(Rc<TrackerInner>);

impl PartialEq for LoadingTracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LoadingTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingTracker")
            .field("aggregator", &*self.0.aggregator.borrow())
            .field("subscribers", &self.0.observers.len())
            .finish()
    }
}

impl Default for LoadingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self(Rc::new(TrackerInner {
            aggregator: RefCell::new(LoadingAggregator::new()),
            observers: Observers::new(),
        }))
    }

    pub fn state(&self) -> LoadingState {
        self.0.aggregator.borrow().state()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.0.aggregator.borrow().is_registered(id)
    }

    /// Attaches `callback`, which immediately receives the current state and
    /// then every state published after it.
    pub fn subscribe(&self, callback: impl Fn(&LoadingState) + 'static) -> SubscriptionId {
        let id = self.0.observers.subscribe(callback);
        self.0.observers.notify_one(id, &self.state());
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.0.observers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.observers.len()
    }

    pub fn resolve_bootstrap(&self) {
        debug!("loading: bootstrap resolved");
        self.apply(|agg| agg.resolve_bootstrap());
    }

    pub fn begin_loading(&self, id: &str) {
        debug!("loading: begin {:?}", id);
        self.apply(|agg| agg.begin_loading(id));
    }

    pub fn set_loading_progress(&self, id: &str, value: f64) {
        trace!("loading: {:?} at {}", id, value);
        self.apply(|agg| agg.set_loading_progress(id, value));
    }

    pub fn end_loading(&self, id: &str) {
        debug!("loading: end {:?}", id);
        self.apply(|agg| agg.end_loading(id));
    }

    pub fn reset_loading(&self) {
        debug!("loading: reset");
        self.apply(|agg| agg.reset_loading());
    }

    /// A named handle for a loader whose begin and end happen at different call-sites.
    pub fn loader(&self, id: impl Into<String>) -> Loader {
        Loader {
            tracker: self.clone(),
            id: id.into(),
        }
    }

    /// Begins loading `id` now and ends it when the guard is dropped.
    pub fn guard(&self, id: impl Into<String>) -> LoaderGuard {
        let loader = self.loader(id);
        loader.begin();
        LoaderGuard(loader)
    }

    // The aggregator borrow ends before broadcasting, so subscribers may
    // call back into the tracker.
    fn apply(&self, op: impl FnOnce(&mut LoadingAggregator) -> Option<LoadingState>) {
        let published = op(&mut self.0.aggregator.borrow_mut());
        if let Some(state) = published {
            self.0.observers.notify(&state);
        }
    }
}

/// One named loader bound to a tracker.
#[derive(Clone, Debug, PartialEq)]
pub struct Loader {
    tracker: LoadingTracker,
    id: String,
}

impl Loader {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn begin(&self) {
        self.tracker.begin_loading(&self.id);
    }

    pub fn set_progress(&self, value: f64) {
        self.tracker.set_loading_progress(&self.id, value);
    }

    pub fn end(&self) {
        self.tracker.end_loading(&self.id);
    }

    pub fn is_active(&self) -> bool {
        self.tracker.is_registered(&self.id)
    }
}

/// Keeps a loader registered for as long as it lives.
///
/// Hold one inside an async block to have the loader end whether the future
/// completes or is dropped part-way.
#[must_use = "the loader ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LoaderGuard(Loader);

impl LoaderGuard {
    pub fn set_progress(&self, value: f64) {
        self.0.set_progress(value);
    }

    pub fn id(&self) -> &str {
        self.0.id()
    }
}

impl Drop for LoaderGuard {
    fn drop(&mut self) {
        self.0.end();
    }
}
