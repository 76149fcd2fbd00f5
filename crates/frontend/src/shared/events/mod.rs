//! In-process event bus shared through Leptos context.

mod bus;
mod types;

pub use bus::{EventBus, Handler, Subscription};
pub use types::{AppEvent, EventType};

use leptos::prelude::*;

pub fn provide_event_bus() -> EventBus {
    let bus = EventBus::new();
    provide_context(bus.clone());
    bus
}

pub fn use_event_bus() -> EventBus {
    use_context::<EventBus>().expect("EventBus not provided in context")
}

/// Subscribe for the lifetime of the current reactive owner; the handler
/// is removed when the owning component unmounts.
pub fn subscribe_scoped<F>(event_type: EventType, handler: F) -> Subscription
where
    F: Fn(&AppEvent) + Send + Sync + 'static,
{
    let bus = use_event_bus();
    let subscription = bus.subscribe(event_type, handler);
    on_cleanup(move || {
        bus.unsubscribe(subscription);
    });
    subscription
}
