use std::sync::Arc;

use super::record::ErrorRecord;

/// Change notification emitted by [`TriageService`](super::TriageService).
#[derive(Debug, Clone)]
pub enum TriageEvent {
    /// The history was appended to or cleared.
    HistoryChanged { len: usize },
    /// The current-error slot changed; the alert is visible iff `current` is set.
    PresentationChanged { current: Option<Arc<ErrorRecord>> },
}

/// Handle returned by [`Subscribers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&TriageEvent)>;

/// Listeners notified synchronously, in subscription order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub fn subscribe(&mut self, listener: impl FnMut(&TriageEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &TriageEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn emits_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();
        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            subscribers.subscribe(move |_| seen.borrow_mut().push(tag));
        }
        subscribers.emit(&TriageEvent::HistoryChanged { len: 1 });
        assert_eq!(*seen.borrow(), ["first", "second"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::default();
        let id = {
            let count = Rc::clone(&count);
            subscribers.subscribe(move |_| *count.borrow_mut() += 1)
        };
        assert!(subscribers.unsubscribe(id));
        subscribers.emit(&TriageEvent::HistoryChanged { len: 0 });
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn unsubscribe_unknown_id_is_false() {
        let mut subscribers = Subscribers::default();
        let id = subscribers.subscribe(|_| {});
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
    }

    #[test]
    fn ids_are_unique() {
        let mut subscribers = Subscribers::default();
        let a = subscribers.subscribe(|_| {});
        let b = subscribers.subscribe(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();
        let ids: Vec<_> = ["first", "second"]
            .into_iter()
            .map(|tag| {
                let seen = Rc::clone(&seen);
                subscribers.subscribe(move |_| seen.borrow_mut().push(tag))
            })
            .collect();
        assert!(subscribers.unsubscribe(ids[0]));
        subscribers.emit(&TriageEvent::HistoryChanged { len: 1 });
        assert_eq!(*seen.borrow(), ["second"]);
    }
}
