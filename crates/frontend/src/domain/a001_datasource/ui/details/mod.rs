mod view;
mod view_model;

pub use view::DatasourceForm;
pub use view_model::DatasourceDetailsVm;

use contracts::domain::a001_datasource::aggregate::PostgresqlDatasource;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_datasource::api;
use crate::shared::events::{subscribe_scoped, use_event_bus, AppEvent, EventBus, EventType};
use crate::shared::modal::Modal;
use crate::shared::storage;
use crate::shared::toast::{use_toast, ToastService};
use crate::store::{use_store, Action, Store};

/// Dialog for adding a connection, or editing the one of `project_id`.
///
/// The form publishes test and save requests on the bus; this component
/// answers them for as long as it is mounted.
#[component]
pub fn DatasourceModal(project_id: Option<String>) -> impl IntoView {
    let bus = use_event_bus();
    let store = use_store();
    let toast = use_toast();
    let is_busy = RwSignal::new(false);
    let is_edit = project_id.is_some();

    let vm = DatasourceDetailsVm::new(bus.clone(), project_id);

    {
        let toast = toast.clone();
        subscribe_scoped(EventType::DatasourceTest, move |event| {
            if let AppEvent::DatasourceTest(datasource) = event {
                test_connection(datasource.clone(), toast.clone(), is_busy);
            }
        });
    }
    {
        let bus = bus.clone();
        subscribe_scoped(EventType::DatasourceSave, move |event| {
            if let AppEvent::DatasourceSave(datasource) = event {
                save_connection(
                    datasource.clone(),
                    is_edit,
                    SaveContext {
                        bus: bus.clone(),
                        store,
                        toast: toast.clone(),
                        is_busy,
                    },
                );
            }
        });
    }

    let title = if is_edit {
        "Edit PostgreSQL Connection"
    } else {
        "New PostgreSQL Connection"
    };

    view! {
        <Modal
            title=title
            on_close=Callback::new(move |_| {
                bus.publish(AppEvent::CloseDatasourceModal(false));
            })
        >
            <DatasourceForm vm=vm is_busy=is_busy />
        </Modal>
    }
}

struct SaveContext {
    bus: EventBus,
    store: Store,
    toast: ToastService,
    is_busy: RwSignal<bool>,
}

fn test_connection(datasource: PostgresqlDatasource, toast: ToastService, is_busy: RwSignal<bool>) {
    is_busy.set(true);
    spawn_local(async move {
        match api::check_connection(datasource).await {
            Ok(_) => {
                toast.success("PostgreSQL connection test successful.");
            }
            Err(e) => {
                log::warn!("Connection test failed: {}", e);
                toast.error("PostgreSQL connection test failed.");
            }
        }
        is_busy.set(false);
    });
}

fn save_connection(datasource: PostgresqlDatasource, is_edit: bool, ctx: SaveContext) {
    ctx.is_busy.set(true);
    spawn_local(async move {
        let result = if is_edit {
            api::edit(&datasource).await
        } else {
            api::create(&datasource).await
        };
        ctx.is_busy.set(false);

        match result {
            Ok(sources) => {
                let current = ctx.store.snapshot().datasource;
                let prefer = if is_edit {
                    None
                } else {
                    Some(datasource.project_id.as_str())
                };
                let next = current.replace_sources(sources, prefer);
                storage::sync_active_project(next.active.as_ref());
                ctx.store.dispatch(Action::AddDataSource(next));

                ctx.toast.success(if is_edit {
                    "PostgreSQL datasource updated successfully."
                } else {
                    "PostgreSQL datasource created successfully."
                });
                ctx.bus.publish(AppEvent::CloseDatasourceModal(false));
            }
            Err(e) => {
                log::error!("Saving data source failed: {}", e);
                ctx.toast.error(if is_edit {
                    "Failed to update postgresql datasource."
                } else {
                    "Failed to create postgresql datasource."
                });
            }
        }
    });
}
