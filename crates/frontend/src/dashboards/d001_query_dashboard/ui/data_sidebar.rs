use contracts::shared::sql::select_all_from;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Select};

use crate::dashboards::d001_query_dashboard::api;
use crate::domain::a001_datasource::ui::details::DatasourceModal;
use crate::shared::events::{subscribe_scoped, EventType};
use crate::shared::icons::icon;
use crate::shared::storage;
use crate::shared::toast::{use_toast, ToastService};
use crate::store::{use_store, Action, Store};

/// Data source picker and the table list of the active source.
#[component]
pub fn DataSidebar() -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let datasource = store.datasource();
    let tables = store.collections();
    let show_add = RwSignal::new(false);

    let active_project = Signal::derive(move || {
        datasource.with(|d| d.active_project_id().map(str::to_string))
    });
    let project = RwSignal::new(active_project.get_untracked().unwrap_or_default());

    subscribe_scoped(EventType::CloseDatasourceModal, move |_| show_add.set(false));

    // A source created from the modal becomes active; mirror it here.
    Effect::new(move |_| {
        if let Some(active) = active_project.get() {
            if active != project.get_untracked() {
                project.set(active);
            }
        }
    });

    {
        let toast = toast.clone();
        Effect::new(move |_| {
            let project_id = project.get();
            if project_id.is_empty() {
                return;
            }
            activate(store, &project_id);
            load_tables(store, project_id, toast.clone());
        });
    }

    let open_table = move |table: String| {
        let Some(project_id) = active_project.get_untracked() else {
            return;
        };
        let sql = select_all_from(&table);
        store.dispatch(Action::AddSqlQuery(sql.clone()));
        let toast = toast.clone();
        spawn_local(async move {
            match api::run_query(&project_id, &sql).await {
                Ok(rows) => store.dispatch(Action::AddDocuments(rows)),
                Err(e) => {
                    log::error!("Failed to read table {}: {}", table, e);
                    toast.error("Failed to return tables");
                }
            }
        });
    };

    view! {
        <aside class="data-sidebar">
            <h3 class="data-sidebar__title">"Data Sources"</h3>

            <Select value=project>
                <option value="" disabled=true>"Select datasource"</option>
                {move || {
                    datasource
                        .get()
                        .data_source
                        .into_iter()
                        .map(|d| {
                            let value = d.project_id.clone();
                            view! { <option value=value>{d.project_id}</option> }
                        })
                        .collect_view()
                }}
            </Select>

            <Button appearance=ButtonAppearance::Primary on_click=move |_| show_add.set(true)>
                {icon("plus")}
                "Add New Data Source"
            </Button>

            <h4 class="data-sidebar__subtitle">"Available Tables"</h4>
            <ul class="data-sidebar__tables">
                <For
                    each=move || tables.get()
                    key=|t: &String| t.clone()
                    children=move |table: String| {
                        let open_table = open_table.clone();
                        let name = table.clone();
                        view! {
                            <li class="data-sidebar__table" on:click=move |_| open_table(table.clone())>
                                {icon("table")}
                                <span>{name}</span>
                            </li>
                        }
                    }
                />
            </ul>

            <Show when=move || show_add.get()>
                <DatasourceModal project_id=None />
            </Show>
        </aside>
    }
}

/// Make the source of `project_id` the active one, if it is not already.
fn activate(store: Store, project_id: &str) {
    let current = store.snapshot().datasource;
    if current.active_project_id() == Some(project_id) {
        return;
    }
    let next = current
        .data_source
        .iter()
        .find(|d| d.project_id == project_id)
        .and_then(|d| current.select(&d.id));
    if let Some(next) = next {
        storage::sync_active_project(next.active.as_ref());
        store.dispatch(Action::AddDataSource(next));
    }
}

fn load_tables(store: Store, project_id: String, toast: ToastService) {
    spawn_local(async move {
        match api::fetch_tables(&project_id).await {
            Ok(tables) => {
                log!("Project {}: {} tables", project_id, tables.len());
                store.dispatch(Action::AddCollections(tables));
                store.dispatch(Action::ClearDocuments);
            }
            Err(e) => {
                log::error!("Failed to load tables of {}: {}", project_id, e);
                toast.error("Failed to return tables");
            }
        }
    });
}
