//! Folds every in-flight loader into the one state shown by the global indicator.

use std::collections::BTreeMap;

/// What the global loading indicator displays.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LoadingState {
    /// `true` while the page is bootstrapping or any loader is registered.
    pub active: bool,
    /// Mean progress of all registered loaders, in `[0, 1]`.
    /// Always `0.0` when not active.
    pub progress: f64,
}

impl LoadingState {
    /// Nothing is loading and bootstrap has been resolved.
    pub const IDLE: Self = Self {
        active: false,
        progress: 0.0,
    };

    /// The state before anything has happened: only the bootstrap loader is active.
    pub const BOOTSTRAP: Self = Self {
        active: true,
        progress: 0.0,
    };

    /// Progress as a whole percentage, for display.
    pub fn percent(&self) -> u8 {
        (self.progress * 100.0).round() as u8
    }
}

/// Tracks named loaders plus the implicit, id-less bootstrap loader.
///
/// Every mutating method returns `Some(state)` when it recomputed the state,
/// which the caller must broadcast, or `None` when the input was ignored.
/// Nothing here ever fails: empty ids, unknown ids and out-of-range
/// progress values are absorbed.
#[derive(Debug)]
pub struct LoadingAggregator {
    // The key set is the loader registry, so every registered id has
    // exactly one progress entry.
    loaders: BTreeMap<String, f64>,
    bootstrap: bool,
    state: LoadingState,
}

impl Default for LoadingAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingAggregator {
    pub fn new() -> Self {
        Self {
            loaders: BTreeMap::new(),
            bootstrap: true,
            state: LoadingState::BOOTSTRAP,
        }
    }

    /// The most recently computed state.
    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn is_bootstrapping(&self) -> bool {
        self.bootstrap
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.loaders.contains_key(id)
    }

    /// Number of registered loaders, not counting bootstrap.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Marks the initial page load as finished. Only the first call has any effect.
    pub fn resolve_bootstrap(&mut self) -> Option<LoadingState> {
        if !self.bootstrap {
            return None;
        }
        self.bootstrap = false;
        Some(self.recompute())
    }

    /// Registers `id` with progress 0, resetting it if already registered.
    ///
    /// The first real loader supersedes the bootstrap loader.
    pub fn begin_loading(&mut self, id: &str) -> Option<LoadingState> {
        if id.is_empty() {
            return None;
        }
        self.bootstrap = false;
        self.loaders.insert(id.to_owned(), 0.0);
        Some(self.recompute())
    }

    /// Sets the progress of a registered loader, clamped into `[0, 1]`.
    ///
    /// Ignored for empty or unregistered ids and for NaN.
    pub fn set_loading_progress(&mut self, id: &str, value: f64) -> Option<LoadingState> {
        if value.is_nan() {
            return None;
        }
        let progress = self.loaders.get_mut(id)?;
        *progress = value.clamp(0.0, 1.0);
        Some(self.recompute())
    }

    /// Unregisters `id`. An unknown id still recomputes, yielding an identical state.
    pub fn end_loading(&mut self, id: &str) -> Option<LoadingState> {
        if id.is_empty() {
            return None;
        }
        self.loaders.remove(id);
        Some(self.recompute())
    }

    /// Drops every registered loader. The bootstrap flag is left alone.
    pub fn reset_loading(&mut self) -> Option<LoadingState> {
        self.loaders.clear();
        Some(self.recompute())
    }

    fn recompute(&mut self) -> LoadingState {
        let active = self.bootstrap || !self.loaders.is_empty();

        let progress = if active && !self.loaders.is_empty() {
            self.loaders.values().sum::<f64>() / self.loaders.len() as f64
        } else {
            0.0
        };

        self.state = LoadingState { active, progress };
        self.state
    }
}
