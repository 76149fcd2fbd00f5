pub mod left;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

/// Signed-in layout: navigation on the left, the routed page on the right.
///
/// ```text
/// +---------+------------------------+
/// | Sidebar |   Outlet (page)        |
/// +---------+------------------------+
/// ```
///
/// The sidebar collapses to icons while a chart is being created or edited.
#[component]
pub fn Shell() -> impl IntoView {
    let location = use_location();
    let compact = Signal::derive(move || {
        location
            .pathname
            .with(|p| p.starts_with("/charts/create") || p.starts_with("/charts/edit"))
    });

    view! {
        <div class="app-layout" class:app-layout--compact=move || compact.get()>
            <left::Sidebar compact=compact />
            <main class="app-main">
                <Outlet />
            </main>
        </div>
    }
}
