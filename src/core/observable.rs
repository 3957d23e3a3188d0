//! Push-based value holder with a last-known value.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle returned by [`Observable::subscribe`], used to unsubscribe.
///
/// Ids are unique across all observables in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(0);

type Observer<T> = Box<dyn FnMut(&T)>;

/// Holds a value and pushes every update to registered observers.
///
/// Observers run synchronously inside [`set`](Self::set), in registration
/// order. New observers immediately receive the current value.
pub struct Observable<T> {
    value: T,
    observers: Vec<(SubscriptionId, Observer<T>)>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            observers: Vec::new(),
        }
    }

    /// Last value set.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and notifies every observer, even if it is unchanged.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.value);
        }
    }

    pub fn subscribe<F>(&mut self, mut observer: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed));
        observer(&self.value);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_get_returns_last_value() {
        let mut value = Observable::new(1);
        assert_eq!(*value.get(), 1);
        value.set(5);
        assert_eq!(*value.get(), 5);
    }

    #[test]
    fn test_subscribe_delivers_current_value() {
        let mut value = Observable::new("hello".to_string());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        value.subscribe(move |v: &String| sink.borrow_mut().push(v.clone()));
        assert_eq!(*seen.borrow(), vec!["hello"]);
    }

    #[test]
    fn test_set_pushes_to_all_observers_in_order() {
        let mut value = Observable::new(0);
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&log);
        let second = Rc::clone(&log);
        value.subscribe(move |v| first.borrow_mut().push(("first", *v)));
        value.subscribe(move |v| second.borrow_mut().push(("second", *v)));
        log.borrow_mut().clear();

        value.set(3);
        assert_eq!(*log.borrow(), vec![("first", 3), ("second", 3)]);
    }

    #[test]
    fn test_equal_value_still_notifies() {
        let mut value = Observable::new(0);
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        value.subscribe(move |_| *counter.borrow_mut() += 1);
        value.set(0);
        value.set(0);
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut value = Observable::new(0);
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = value.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(value.subscriber_count(), 1);

        assert!(value.unsubscribe(id));
        assert!(!value.unsubscribe(id));
        value.set(1);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(value.subscriber_count(), 0);
    }

    #[test]
    fn test_ids_unique_across_observables() {
        let mut a = Observable::new(0);
        let mut b = Observable::new(0);
        let id_a = a.subscribe(|_| {});
        let id_b = b.subscribe(|_| {});
        assert_ne!(id_a, id_b);
        assert!(!b.unsubscribe(id_a));
        assert_eq!(b.subscriber_count(), 1);
    }
}
