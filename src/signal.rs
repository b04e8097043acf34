/// Push-based value signal: a last-value cell plus a listener list.
///
/// A `Signal` remembers the last value it delivered. A new subscriber
/// immediately receives that value; afterwards every subscriber is notified
/// on each change, and only on change (a publish of an equal value is
/// swallowed). Callbacks run synchronously inside `publish`, on the single
/// thread that owns the signal. There is no locking and no internal
/// reference counting; subscribers detach with [`Signal::unsubscribe`].

/// Handle identifying one subscription, returned by [`Signal::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Listener<V> {
    id: u64,
    callback: Box<dyn FnMut(V)>,
}

/// Multicast change-only signal over a `Copy` value.
pub struct Signal<V> {
    last: V,
    next_id: u64,
    listeners: Vec<Listener<V>>,
}

impl<V: Copy + PartialEq> Signal<V> {
    /// Creates a signal holding `initial` as its last delivered value.
    pub fn new(initial: V) -> Self {
        Self {
            last: initial,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Current value, without subscribing.
    pub fn get(&self) -> V {
        self.last
    }

    /// Registers `callback` and immediately delivers the current value to it.
    pub fn subscribe(&mut self, callback: impl FnMut(V) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        let mut callback = Box::new(callback);
        callback(self.last);
        self.listeners.push(Listener { id, callback });
        SubscriptionId(id)
    }

    /// Detaches a listener. Returns `false` if the id was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id.0);
        self.listeners.len() < before
    }

    /// Stores `value` and notifies every listener, unless it equals the last
    /// delivered value, in which case nothing is emitted.
    pub fn publish(&mut self, value: V) {
        if value == self.last {
            return;
        }
        self.last = value;
        for listener in &mut self.listeners {
            (listener.callback)(value);
        }
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_signal(initial: bool) -> (Signal<bool>, Rc<RefCell<Vec<bool>>>, SubscriptionId) {
        let mut signal = Signal::new(initial);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = signal.subscribe(move |v| sink.borrow_mut().push(v));
        (signal, seen, id)
    }

    #[test]
    fn test_subscribe_replays_latest() {
        let (_signal, seen, _id) = recording_signal(true);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn test_publish_emits_only_on_change() {
        let (mut signal, seen, _id) = recording_signal(false);
        signal.publish(false);
        signal.publish(false);
        signal.publish(true);
        signal.publish(true);
        signal.publish(false);
        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }

    #[test]
    fn test_get_tracks_last_published() {
        let (mut signal, _seen, _id) = recording_signal(false);
        assert!(!signal.get());
        signal.publish(true);
        assert!(signal.get());
    }

    #[test]
    fn test_multiple_subscribers_all_notified() {
        let mut signal = Signal::new(0u32);
        let a = Rc::new(RefCell::new(Vec::new()));
        let b = Rc::new(RefCell::new(Vec::new()));
        let sink_a = Rc::clone(&a);
        let sink_b = Rc::clone(&b);
        signal.subscribe(move |v| sink_a.borrow_mut().push(v));
        signal.subscribe(move |v| sink_b.borrow_mut().push(v));

        signal.publish(1);
        signal.publish(2);

        assert_eq!(*a.borrow(), vec![0, 1, 2]);
        assert_eq!(*b.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let (mut signal, seen, id) = recording_signal(false);
        assert!(signal.unsubscribe(id));
        signal.publish(true);
        assert_eq!(*seen.borrow(), vec![false]);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_twice_returns_false() {
        let (mut signal, _seen, id) = recording_signal(false);
        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
    }

    #[test]
    fn test_late_subscriber_sees_current_value_only() {
        let mut signal = Signal::new(false);
        signal.publish(true);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        signal.subscribe(move |v| sink.borrow_mut().push(v));
        assert_eq!(*seen.borrow(), vec![true]);
    }
}
