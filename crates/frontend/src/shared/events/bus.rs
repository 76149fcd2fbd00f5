use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};

use super::types::{AppEvent, EventType};

pub type Handler = Arc<dyn Fn(&AppEvent) + Send + Sync>;

/// Handle identifying one registration; required to unsubscribe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    event_type: EventType,
    id: u64,
}

impl Subscription {
    pub fn event_type(&self) -> EventType {
        self.event_type
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: HashMap<EventType, Vec<(u64, Handler)>>,
}

/// Publish/subscribe registry keyed by event type.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, event_type: EventType, handler: F) -> Subscription
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        registry.next_id += 1;
        let id = registry.next_id;
        registry
            .handlers
            .entry(event_type)
            .or_default()
            .push((id, Arc::new(handler)));
        Subscription { event_type, id }
    }

    /// Remove exactly the registration behind `subscription`.
    /// Returns `false` when it was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut registry = self.lock();
        let Some(list) = registry.handlers.get_mut(&subscription.event_type) else {
            return false;
        };
        let before = list.len();
        list.retain(|(id, _)| *id != subscription.id);
        let removed = list.len() != before;
        if list.is_empty() {
            registry.handlers.remove(&subscription.event_type);
        }
        removed
    }

    /// Deliver `event` to the handlers registered for its type, in
    /// registration order. Returns how many handlers ran.
    ///
    /// Handlers registered or removed during delivery take effect from the
    /// next publish.
    ///
    /// A panicking handler is logged and skipped only where panics unwind.
    /// The `wasm32-unknown-unknown` build aborts on panic, so there a
    /// panicking handler stops the app and later handlers never run;
    /// handlers report failures through toasts and logs instead.
    pub fn publish(&self, event: AppEvent) -> usize {
        let event_type = event.event_type();
        let snapshot: Vec<Handler> = match self.lock().handlers.get(&event_type) {
            Some(list) => list.iter().map(|(_, h)| Arc::clone(h)).collect(),
            None => return 0,
        };

        for handler in &snapshot {
            let result = panic::catch_unwind(AssertUnwindSafe(|| handler(&event)));
            if result.is_err() {
                log::error!("Handler for '{}' panicked", event_type);
            }
        }
        snapshot.len()
    }

    pub fn subscriber_count(&self, event_type: EventType) -> usize {
        self.lock()
            .handlers
            .get(&event_type)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_chart::aggregate::ChartResult;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn close_event(reload: bool) -> AppEvent {
        AppEvent::CloseDatasourceModal(reload)
    }

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> Handler) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_for_make = Arc::clone(&log);
        let make = move |tag: &str| -> Handler {
            let log = Arc::clone(&log_for_make);
            let tag = tag.to_string();
            Arc::new(move |event: &AppEvent| {
                if let AppEvent::CloseDatasourceModal(reload) = event {
                    log.lock().unwrap().push(format!("{}:{}", tag, reload));
                }
            })
        };
        (log, make)
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(close_event(true)), 0);
    }

    #[test]
    fn test_handlers_receive_payloads_in_order() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        let a = make("a");
        let b = make("b");
        bus.subscribe(EventType::CloseDatasourceModal, move |e| a(e));
        bus.subscribe(EventType::CloseDatasourceModal, move |e| b(e));

        assert_eq!(bus.publish(close_event(true)), 2);
        assert_eq!(bus.publish(close_event(false)), 2);

        assert_eq!(
            *log.lock().unwrap(),
            vec!["a:true", "b:true", "a:false", "b:false"]
        );
    }

    #[test]
    fn test_other_event_types_are_not_delivered() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        bus.subscribe(EventType::ChartChange, move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(close_event(true));
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        bus.publish(AppEvent::ChartChange(ChartResult::default()));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_removes_only_that_handler() {
        let bus = EventBus::new();
        let (log, make) = recorder();
        let a = make("a");
        let b = make("b");
        let sub_a = bus.subscribe(EventType::CloseDatasourceModal, move |e| a(e));
        bus.subscribe(EventType::CloseDatasourceModal, move |e| b(e));

        assert!(bus.unsubscribe(sub_a));
        assert!(!bus.unsubscribe(sub_a));
        assert_eq!(bus.subscriber_count(EventType::CloseDatasourceModal), 1);

        bus.publish(close_event(true));
        assert_eq!(*log.lock().unwrap(), vec!["b:true"]);
    }

    #[test]
    fn test_same_closure_twice_gives_independent_subscriptions() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let handler: Handler = Arc::new(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        let h1 = Arc::clone(&handler);
        let h2 = Arc::clone(&handler);
        let first = bus.subscribe(EventType::SaveChart, move |e| h1(e));
        bus.subscribe(EventType::SaveChart, move |e| h2(e));
        assert_ne!(first, bus.subscribe(EventType::SaveChart, |_| {}));

        bus.unsubscribe(first);
        bus.publish(AppEvent::SaveChart(Default::default()));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_panicking_handler_does_not_stop_delivery() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        bus.subscribe(EventType::CloseDatasourceModal, |_| panic!("boom"));
        bus.subscribe(EventType::CloseDatasourceModal, move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.publish(close_event(true)), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reentrant_subscribe_and_publish() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let inner_bus = bus.clone();
        let h = Arc::clone(&hits);
        bus.subscribe(EventType::CloseDatasourceModal, move |event| {
            let h = Arc::clone(&h);
            inner_bus.subscribe(EventType::ChartChange, move |_| {
                h.fetch_add(1, Ordering::SeqCst);
            });
            if let AppEvent::CloseDatasourceModal(true) = event {
                inner_bus.publish(AppEvent::ChartChange(ChartResult::default()));
            }
        });

        bus.publish(close_event(true));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(EventType::ChartChange), 1);
    }
}
