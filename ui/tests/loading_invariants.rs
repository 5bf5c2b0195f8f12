use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use proptest::prelude::*;
use ui::loading::LoadingState;
use ui::loading::LoadingTracker;

#[derive(Clone, Debug)]
enum Op {
    ResolveBootstrap,
    Begin(&'static str),
    SetProgress(&'static str, f64),
    End(&'static str),
    Reset,
}

fn id() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("page"), Just("images"), Just("fetch")]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::ResolveBootstrap),
        id().prop_map(Op::Begin),
        (id(), -0.5f64..1.5).prop_map(|(id, v)| Op::SetProgress(id, v)),
        id().prop_map(Op::End),
        Just(Op::Reset),
    ]
}

/// A straightforward model of what the tracker should publish.
#[derive(Default)]
struct Model {
    resolved: bool,
    loaders: HashMap<&'static str, f64>,
}

impl Model {
    fn bootstrap(&self) -> bool {
        !self.resolved
    }

    fn apply(&mut self, op: &Op) {
        match *op {
            Op::ResolveBootstrap => self.resolved = true,
            Op::Begin(id) if !id.is_empty() => {
                self.resolved = true;
                self.loaders.insert(id, 0.0);
            }
            Op::SetProgress(id, v) => {
                if let Some(p) = self.loaders.get_mut(id) {
                    *p = v.clamp(0.0, 1.0);
                }
            }
            Op::End(id) => {
                self.loaders.remove(id);
            }
            Op::Reset => self.loaders.clear(),
            Op::Begin(_) => {}
        }
    }

    fn mean(&self) -> f64 {
        if self.loaders.is_empty() {
            0.0
        } else {
            self.loaders.values().sum::<f64>() / self.loaders.len() as f64
        }
    }
}

fn run(tracker: &LoadingTracker, op: &Op) {
    match *op {
        Op::ResolveBootstrap => tracker.resolve_bootstrap(),
        Op::Begin(id) => tracker.begin_loading(id),
        Op::SetProgress(id, v) => tracker.set_loading_progress(id, v),
        Op::End(id) => tracker.end_loading(id),
        Op::Reset => tracker.reset_loading(),
    }
}

proptest! {
    #[test]
    fn published_state_follows_the_model(ops in prop::collection::vec(op(), 0..40)) {
        let tracker = LoadingTracker::new();
        let last = Rc::new(RefCell::new(None::<LoadingState>));
        {
            let last = last.clone();
            tracker.subscribe(move |state| *last.borrow_mut() = Some(*state));
        }
        let mut model = Model::default();

        for op in &ops {
            run(&tracker, op);
            model.apply(op);

            let state = tracker.state();
            prop_assert_eq!(Some(state), *last.borrow());
            prop_assert_eq!(state.active, model.bootstrap() || !model.loaders.is_empty());
            if !state.active {
                prop_assert_eq!(state.progress, 0.0);
            } else {
                prop_assert!((state.progress - model.mean()).abs() < 1e-9);
            }
            prop_assert!((0.0..=1.0).contains(&state.progress));
        }
    }

    #[test]
    fn unknown_ids_never_change_published_state(
        ops in prop::collection::vec(op(), 0..20),
        value in -1.0f64..2.0,
    ) {
        let tracker = LoadingTracker::new();
        for op in &ops {
            run(&tracker, op);
        }
        let before = tracker.state();

        tracker.set_loading_progress("never-registered", value);
        prop_assert_eq!(tracker.state(), before);

        tracker.end_loading("never-registered");
        prop_assert_eq!(tracker.state(), before);
    }

    #[test]
    fn resolving_bootstrap_twice_equals_once(ops in prop::collection::vec(op(), 0..20)) {
        let once = LoadingTracker::new();
        let twice = LoadingTracker::new();
        for op in &ops {
            run(&once, op);
            run(&twice, op);
        }

        once.resolve_bootstrap();
        twice.resolve_bootstrap();
        twice.resolve_bootstrap();

        prop_assert_eq!(once.state(), twice.state());
    }
}
