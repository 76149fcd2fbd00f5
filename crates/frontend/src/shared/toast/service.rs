use std::sync::{Arc, Mutex, PoisonError};

use crate::shared::events::{AppEvent, EventBus};

pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

/// Runs a task once after a delay.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce() + Send>);
}

/// `setTimeout`-backed scheduler for the browser.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce() + Send>) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}

/// Transient notifications. Every change publishes the full list on
/// `toast.message`.
#[derive(Clone)]
pub struct ToastService {
    bus: EventBus,
    toasts: Arc<Mutex<Vec<Toast>>>,
    scheduler: Arc<dyn Scheduler>,
}

impl ToastService {
    pub fn new(bus: EventBus, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            bus,
            toasts: Arc::new(Mutex::new(Vec::new())),
            scheduler,
        }
    }

    /// Add a toast and return its id. A positive `duration_ms` removes it
    /// automatically after that delay.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> String {
        let toast = Toast {
            id: uuid::Uuid::new_v4().to_string(),
            message: message.into(),
            kind,
            duration_ms,
        };
        let id = toast.id.clone();

        self.lock().push(toast);
        self.notify();

        if duration_ms > 0 {
            let service = self.clone();
            let toast_id = id.clone();
            self.scheduler
                .schedule(duration_ms, Box::new(move || service.remove(&toast_id)));
        }
        id
    }

    /// Drop the toast with `id`. Publishes even when nothing was removed.
    pub fn remove(&self, id: &str) {
        self.lock().retain(|t| t.id != id);
        self.notify();
    }

    pub fn success(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Success, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn error(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Error, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn info(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Info, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn warning(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Warning, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    fn notify(&self) {
        let snapshot = self.toasts();
        self.bus.publish(AppEvent::ToastMessage(snapshot));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::events::EventType;

    /// Collects scheduled tasks so tests decide when they fire.
    #[derive(Default)]
    struct ManualScheduler {
        tasks: Mutex<Vec<(u32, Box<dyn FnOnce() + Send>)>>,
    }

    impl ManualScheduler {
        fn delays(&self) -> Vec<u32> {
            self.tasks.lock().unwrap().iter().map(|(d, _)| *d).collect()
        }

        fn run_all(&self) {
            let tasks: Vec<_> = self.tasks.lock().unwrap().drain(..).collect();
            for (_, task) in tasks {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce() + Send>) {
            self.tasks.lock().unwrap().push((delay_ms, task));
        }
    }

    fn setup() -> (ToastService, Arc<ManualScheduler>, Arc<Mutex<Vec<Vec<Toast>>>>) {
        let bus = EventBus::new();
        let published = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&published);
        bus.subscribe(EventType::ToastMessage, move |event| {
            if let AppEvent::ToastMessage(list) = event {
                sink.lock().unwrap().push(list.clone());
            }
        });
        let scheduler = Arc::new(ManualScheduler::default());
        let service = ToastService::new(bus, scheduler.clone());
        (service, scheduler, published)
    }

    #[test]
    fn test_show_then_remove_publishes_twice() {
        let (service, _, published) = setup();
        let id = service.show("x", ToastKind::Error, 0);
        service.remove(&id);

        let published = published.lock().unwrap();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0].len(), 1);
        assert_eq!(published[0][0].message, "x");
        assert_eq!(published[0][0].kind, ToastKind::Error);
        assert!(published[1].is_empty());
    }

    #[test]
    fn test_auto_dismiss_after_duration() {
        let (service, scheduler, published) = setup();
        service.success("Chart saved successfully.");
        assert_eq!(scheduler.delays(), vec![DEFAULT_TOAST_DURATION_MS]);
        assert_eq!(service.toasts().len(), 1);

        scheduler.run_all();
        assert!(service.toasts().is_empty());
        assert_eq!(published.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_zero_duration_is_sticky() {
        let (service, scheduler, _) = setup();
        service.show("sticky", ToastKind::Info, 0);
        assert!(scheduler.delays().is_empty());
    }

    #[test]
    fn test_manual_dismissal_then_timer_is_harmless() {
        let (service, scheduler, published) = setup();
        let first = service.error("Failed to return data.");
        service.warning("second");
        service.remove(&first);
        scheduler.run_all();

        assert!(service.toasts().is_empty());
        // two shows, one manual remove, two timer removals
        assert_eq!(published.lock().unwrap().len(), 5);
    }

    #[test]
    fn test_ids_are_unique() {
        let (service, _, _) = setup();
        let a = service.info("a");
        let b = service.info("b");
        assert_ne!(a, b);
        assert_eq!(service.toasts().len(), 2);
    }
}
