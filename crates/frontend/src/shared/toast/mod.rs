mod host;
mod service;

pub use host::ToastHost;
pub use service::{
    BrowserScheduler, Scheduler, Toast, ToastKind, ToastService, DEFAULT_TOAST_DURATION_MS,
};

use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::events::EventBus;

/// Provide the single toast service for the app.
pub fn provide_toast_service(bus: EventBus) -> ToastService {
    let service = ToastService::new(bus, Arc::new(BrowserScheduler));
    provide_context(service.clone());
    service
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}
