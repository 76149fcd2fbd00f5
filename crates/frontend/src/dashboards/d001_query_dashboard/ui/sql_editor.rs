use contracts::shared::sql::{prepare_select, validate_select};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Textarea};

use crate::dashboards::d001_query_dashboard::api;
use crate::shared::toast::use_toast;
use crate::store::{use_store, Action};

/// Hand-written SELECT, validated as it is typed. Results land in the
/// store's documents.
#[component]
pub fn SqlEditor(is_loading: RwSignal<bool>) -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let query = RwSignal::new(store.snapshot().sql.sql_query);
    let stored_query = Signal::derive(move || store.sql().with(|s| s.sql_query.clone()));

    // Follow queries issued from elsewhere, e.g. the table list.
    Effect::new(move |_| {
        let stored = stored_query.get();
        if !stored.is_empty() && stored != query.get_untracked() {
            query.set(stored);
        }
    });

    let validation = Signal::derive(move || validate_select(&query.get()));

    let run = move |_: ev::MouseEvent| {
        let text = query.get_untracked();
        if !validate_select(&text).is_valid {
            return;
        }
        let Some(project_id) = store.snapshot().datasource.active_project_id().map(str::to_string)
        else {
            toast.warning("Select a data source first.");
            return;
        };

        store.dispatch(Action::AddSqlQuery(text.clone()));
        let prepared = prepare_select(&text);
        log::debug!("Executing: {}", prepared);

        let toast = toast.clone();
        is_loading.set(true);
        spawn_local(async move {
            match api::run_query(&project_id, &prepared).await {
                Ok(rows) => store.dispatch(Action::AddDocuments(rows)),
                Err(e) => {
                    log::error!("Query failed: {}", e);
                    toast.error("Failed to return tables");
                }
            }
            is_loading.set(false);
        });
    };

    let clear = move |_: ev::MouseEvent| {
        query.set(String::new());
        store.dispatch(Action::ClearSqlQuery);
        store.dispatch(Action::ClearDocuments);
    };

    view! {
        <div class="editor sql-editor">
            <div class="editor__toolbar">
                <Button appearance=ButtonAppearance::Secondary on_click=clear>
                    "Clear"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !validation.get().is_valid)
                    on_click=run
                >
                    "Run Query"
                </Button>
            </div>
            <div class="sql-editor__input">
                <Textarea value=query placeholder="Enter your SELECT query here..." />
                {move || {
                    let result = validation.get();
                    (!query.with(|q| q.is_empty())).then(|| {
                        let class = if result.is_valid {
                            "validation validation--ok"
                        } else {
                            "validation validation--error"
                        };
                        view! { <div class=class>{result.message}</div> }
                    })
                }}
            </div>
        </div>
    }
}
