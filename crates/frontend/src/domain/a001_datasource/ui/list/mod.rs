use contracts::domain::a001_datasource::aggregate::Datasource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_datasource::api;
use crate::domain::a001_datasource::ui::details::DatasourceModal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::events::{subscribe_scoped, AppEvent, EventType};
use crate::shared::icons::icon;
use crate::shared::storage;
use crate::shared::toast::use_toast;
use crate::store::{use_store, Action};

#[derive(Clone, Debug, PartialEq)]
enum ModalState {
    Closed,
    Add,
    Edit(String),
}

/// Cards for every data source of the signed-in user.
#[component]
pub fn DatasourceList() -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let modal = RwSignal::new(ModalState::Closed);
    let datasource = store.datasource();

    let reload = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(sources) => {
                    let next = store.snapshot().datasource.replace_sources(sources, None);
                    storage::sync_active_project(next.active.as_ref());
                    store.dispatch(Action::AddDataSource(next));
                }
                Err(e) => log::error!("Failed to load data sources: {}", e),
            }
        });
    };

    subscribe_scoped(EventType::CloseDatasourceModal, move |event| {
        if let AppEvent::CloseDatasourceModal(reload_list) = event {
            modal.set(ModalState::Closed);
            if *reload_list {
                reload();
            }
        }
    });

    let handle_delete = move |source: Datasource| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this data source?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let toast = toast.clone();
        spawn_local(async move {
            match api::delete(&source.id).await {
                Ok(deleted) => {
                    let current = store.snapshot().datasource;
                    let remaining: Vec<Datasource> = current
                        .data_source
                        .iter()
                        .filter(|d| d.id != deleted.id)
                        .cloned()
                        .collect();
                    let next = current.replace_sources(remaining, None);
                    storage::sync_active_project(next.active.as_ref());
                    store.dispatch(Action::AddDataSource(next));
                    toast.success("PostgreSQL datasource deleted successfully.");
                }
                Err(e) => {
                    log::error!("Failed to delete data source {}: {}", source.id, e);
                    toast.error("Failed to delete datasource.");
                }
            }
        });
    };

    view! {
        <div class="page datasource-page">
            <PageHeader title="Data Sources" subtitle="View and manage your datasources">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| modal.set(ModalState::Add)
                >
                    {icon("plus")}
                    "Add Data Source"
                </Button>
            </PageHeader>

            <Show
                when=move || !datasource.get().data_source.is_empty()
                fallback=|| view! {
                    <div class="empty-state">"You have not created any data source."</div>
                }
            >
                <div class="card-grid">
                    <For
                        each=move || datasource.get().data_source
                        key=|d: &Datasource| d.id.clone()
                        children={
                            let handle_delete = handle_delete.clone();
                            move |source: Datasource| {
                            let project_id = source.project_id.clone();
                            let title = source.project_id.clone();
                            let badge = source.source_type.to_uppercase();
                            let database = source.database_name().to_string();
                            let handle_delete = handle_delete.clone();
                            view! {
                                <div class="card">
                                    <div class="card__title" title=title.clone()>
                                        {icon("database")}
                                        <h2>{title.clone()}</h2>
                                        <span class="card__badge">{badge}</span>
                                    </div>
                                    <div class="card__meta">{database}</div>
                                    <div class="card__actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| modal.set(ModalState::Edit(project_id.clone()))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Delete"
                                            on:click=move |_| handle_delete(source.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </div>
                                </div>
                            }
                        }}
                    />
                </div>
            </Show>

            {move || match modal.get() {
                ModalState::Closed => None,
                ModalState::Add => Some(view! { <DatasourceModal project_id=None /> }.into_any()),
                ModalState::Edit(project_id) => {
                    Some(view! { <DatasourceModal project_id=Some(project_id) /> }.into_any())
                }
            }}
        </div>
    }
}
