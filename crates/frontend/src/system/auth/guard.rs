use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::Spinner;

use super::{api, context};
use crate::store::use_store;

#[derive(Clone, Copy, Debug, PartialEq)]
enum SessionCheck {
    Pending,
    Valid,
    Rejected,
}

/// Renders `children` only after the server confirms the session.
/// Otherwise signs out and returns to the landing page.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let store = use_store();
    let navigate = use_navigate();
    let status = RwSignal::new(SessionCheck::Pending);

    spawn_local(async move {
        match api::check_current_user().await {
            Ok(payload) if context::apply_auth_payload(store, payload.clone()) => {
                status.set(SessionCheck::Valid);
            }
            Ok(_) => status.set(SessionCheck::Rejected),
            Err(e) => {
                log::info!("Session check failed: {}", e);
                status.set(SessionCheck::Rejected);
            }
        }
    });

    Effect::new(move |_| {
        if status.get() == SessionCheck::Rejected {
            let navigate = navigate.clone();
            spawn_local(async move {
                context::sign_out(store).await;
                navigate("/", Default::default());
            });
        }
    });

    view! {
        <Show
            when=move || status.get() == SessionCheck::Valid
            fallback=|| view! {
                <div class="page-loading">
                    <Spinner />
                </div>
            }
        >
            {children()}
        </Show>
    }
}
