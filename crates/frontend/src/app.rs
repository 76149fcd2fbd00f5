use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::events::provide_event_bus;
use crate::shared::storage;
use crate::shared::toast::{provide_toast_service, ToastHost};
use crate::store::Store;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new());

    let bus = provide_event_bus();
    provide_toast_service(bus);

    // The active project is per tab session.
    let unload = window_event_listener(leptos::ev::beforeunload, |_| {
        storage::clear_active_project();
    });
    on_cleanup(move || unload.remove());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
