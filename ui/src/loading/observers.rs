//! A minimal single-threaded publish/subscribe list.

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Identifies one attached callback, for detaching it later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Slots<T> {
    next_id: u64,
    // bumped on every notify; lets an outer broadcast notice a nested one
    generation: u64,
    callbacks: Vec<(SubscriptionId, Callback<T>)>,
}

/// Callbacks invoked synchronously, in registration order, on every `notify`.
///
/// Callbacks may subscribe, unsubscribe or trigger another `notify` while
/// being called. A nested `notify` supersedes the one in progress: callbacks
/// the outer broadcast had not reached yet only see the newer value.
pub struct Observers<T> {
    slots: RefCell<Slots<T>>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Slots {
                next_id: 0,
                generation: 0,
                callbacks: Vec::new(),
            }),
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let mut slots = self.slots.borrow_mut();
        let id = SubscriptionId(slots.next_id);
        slots.next_id += 1;
        slots.callbacks.push((id, Rc::new(callback)));
        id
    }

    /// Detaches a callback. Returns `false` if it was not attached.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut slots = self.slots.borrow_mut();
        let before = slots.callbacks.len();
        slots.callbacks.retain(|(slot_id, _)| *slot_id != id);
        slots.callbacks.len() != before
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delivers `value` to a single subscriber, if still attached.
    pub fn notify_one(&self, id: SubscriptionId, value: &T) {
        let callback = self.find(id);
        if let Some(callback) = callback {
            callback(value);
        }
    }

    /// Delivers `value` to every subscriber.
    pub fn notify(&self, value: &T) {
        let (generation, snapshot) = {
            let mut slots = self.slots.borrow_mut();
            slots.generation += 1;
            (slots.generation, slots.callbacks.clone())
        };

        for (id, callback) in snapshot {
            {
                let slots = self.slots.borrow();
                if slots.generation != generation {
                    break;
                }
                if !slots.callbacks.iter().any(|(slot_id, _)| *slot_id == id) {
                    continue;
                }
            }
            callback(value);
        }
    }

    fn find(&self, id: SubscriptionId) -> Option<Callback<T>> {
        self.slots
            .borrow()
            .callbacks
            .iter()
            .find(|(slot_id, _)| *slot_id == id)
            .map(|(_, callback)| callback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn Fn(&u32)>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = {
            let log = log.clone();
            move |name: &str| -> Box<dyn Fn(&u32)> {
                let log = log.clone();
                let name = name.to_owned();
                Box::new(move |v: &u32| log.borrow_mut().push(format!("{name}:{v}")))
            }
        };
        (log, make)
    }

    #[test]
    fn notifies_in_registration_order() {
        let (log, make) = recorder();
        let observers = Observers::new();
        observers.subscribe(make("a"));
        observers.subscribe(make("b"));
        observers.subscribe(make("c"));

        observers.notify(&1);
        assert_eq!(*log.borrow(), ["a:1", "b:1", "c:1"]);
    }

    #[test]
    fn unsubscribe_detaches() {
        let (log, make) = recorder();
        let observers = Observers::new();
        let a = observers.subscribe(make("a"));
        observers.subscribe(make("b"));

        assert!(observers.unsubscribe(a));
        assert!(!observers.unsubscribe(a));
        observers.notify(&2);

        assert_eq!(*log.borrow(), ["b:2"]);
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn notify_one_targets_a_single_subscriber() {
        let (log, make) = recorder();
        let observers = Observers::new();
        observers.subscribe(make("a"));
        let b = observers.subscribe(make("b"));

        observers.notify_one(b, &3);
        assert_eq!(*log.borrow(), ["b:3"]);
    }

    #[test]
    fn subscriber_detached_mid_broadcast_is_skipped() {
        let (log, make) = recorder();
        let observers = Rc::new(Observers::new());
        let victim = Rc::new(Cell::new(None));

        {
            let observers_ref = Rc::downgrade(&observers);
            let victim = victim.clone();
            observers.subscribe(move |_: &u32| {
                if let (Some(observers), Some(id)) = (observers_ref.upgrade(), victim.get()) {
                    observers.unsubscribe(id);
                }
            });
        }
        victim.set(Some(observers.subscribe(make("victim"))));
        observers.subscribe(make("after"));

        observers.notify(&4);
        assert_eq!(*log.borrow(), ["after:4"]);
    }

    #[test]
    fn nested_notify_supersedes_outer() {
        let (log, make) = recorder();
        let observers = Rc::new(Observers::new());

        observers.subscribe(make("first"));
        {
            let observers_ref = Rc::downgrade(&observers);
            observers.subscribe(move |v: &u32| {
                if *v == 1 {
                    if let Some(observers) = observers_ref.upgrade() {
                        observers.notify(&2);
                    }
                }
            });
        }
        observers.subscribe(make("last"));

        observers.notify(&1);
        assert_eq!(*log.borrow(), ["first:1", "first:2", "last:2"]);
    }

    #[test]
    fn subscribe_during_notify_does_not_receive_current_value() {
        let (log, make) = recorder();
        let observers = Rc::new(Observers::new());
        {
            let observers_ref = Rc::downgrade(&observers);
            let log = log.clone();
            let added = Cell::new(false);
            observers.subscribe(move |_: &u32| {
                if !added.replace(true) {
                    if let Some(observers) = observers_ref.upgrade() {
                        let log = log.clone();
                        observers.subscribe(move |v: &u32| log.borrow_mut().push(format!("late:{v}")));
                    }
                }
            });
        }
        observers.subscribe(make("b"));

        observers.notify(&5);
        observers.notify(&6);
        assert_eq!(*log.borrow(), ["b:5", "b:6", "late:6"]);
    }
}
