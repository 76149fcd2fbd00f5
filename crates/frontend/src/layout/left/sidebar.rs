//! Sidebar with the main navigation and logout.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use crate::shared::icons::icon;
use crate::store::use_store;
use crate::system::auth::context::sign_out;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU_ITEMS: [MenuItem; 3] = [
    MenuItem {
        path: "/dashboard",
        label: "Dashboard",
        icon: "dashboard",
    },
    MenuItem {
        path: "/charts",
        label: "Charts",
        icon: "bar-chart",
    },
    MenuItem {
        path: "/datasources",
        label: "Data Sources",
        icon: "database",
    },
];

/// `/charts/edit/1` keeps "Charts" highlighted.
fn is_active(pathname: &str, item: &MenuItem) -> bool {
    pathname == item.path || pathname.starts_with(&format!("{}/", item.path))
}

#[component]
pub fn Sidebar(
    /// Icons only, no labels.
    #[prop(into)]
    compact: Signal<bool>,
) -> impl IntoView {
    let store = use_store();
    let location = use_location();
    let navigate = use_navigate();

    let logout = {
        let navigate = navigate.clone();
        move |_: ev::MouseEvent| {
            let navigate = navigate.clone();
            spawn_local(async move {
                sign_out(store).await;
                navigate("/", Default::default());
            });
        }
    };

    view! {
        <nav class="app-sidebar" class:app-sidebar--compact=move || compact.get()>
            <div class="app-sidebar__brand">
                {icon("bar-chart")}
                <Show when=move || !compact.get()>
                    <span>"QueryLens"</span>
                </Show>
            </div>

            <div class="app-sidebar__content">
                {MENU_ITEMS
                    .into_iter()
                    .map(|item| {
                        let navigate = navigate.clone();
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    location.pathname.with(|p| is_active(p, &item))
                                }
                                title=item.label
                                on:click=move |_| navigate(item.path, Default::default())
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <Show when=move || !compact.get()>
                                        <span>{item.label}</span>
                                    </Show>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="app-sidebar__item app-sidebar__logout" title="Logout" on:click=logout>
                <div class="app-sidebar__item-content">
                    {icon("logout")}
                    <Show when=move || !compact.get()>
                        <span>"Logout"</span>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_matches_nested_paths() {
        let charts = MENU_ITEMS[1];
        assert!(is_active("/charts", &charts));
        assert!(is_active("/charts/edit/42", &charts));
        assert!(!is_active("/chartsx", &charts));
        assert!(!is_active("/dashboard", &charts));
    }
}
