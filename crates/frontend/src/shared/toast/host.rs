use leptos::prelude::*;

use super::{use_toast, Toast};
use crate::shared::events::{subscribe_scoped, AppEvent, EventType};
use crate::shared::icons::icon;

/// Renders the current toasts in the corner of the page.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();
    let toasts = RwSignal::new(service.toasts());

    subscribe_scoped(EventType::ToastMessage, move |event| {
        if let AppEvent::ToastMessage(list) = event {
            toasts.set(list.clone());
        }
    });

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.get()
                key=|t: &Toast| t.id.clone()
                children=move |t: Toast| {
                    let service = service.clone();
                    let id = t.id.clone();
                    view! {
                        <div class=format!("toast toast--{}", t.kind.as_str())>
                            <span class="toast__message">{t.message}</span>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| service.remove(&id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
