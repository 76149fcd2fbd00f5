use contracts::domain::a001_datasource::aggregate::PostgresqlDatasource;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_datasource::api;
use crate::shared::events::{AppEvent, EventBus};

/// Editable text fields of the connection form.
#[derive(Clone, Copy)]
pub struct ConnectionFields {
    pub project_id: RwSignal<String>,
    pub database_url: RwSignal<String>,
    pub port: RwSignal<String>,
    pub database_name: RwSignal<String>,
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl ConnectionFields {
    fn new() -> Self {
        Self {
            project_id: RwSignal::new(String::new()),
            database_url: RwSignal::new(String::new()),
            port: RwSignal::new(String::new()),
            database_name: RwSignal::new(String::new()),
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, datasource: &PostgresqlDatasource) {
        self.project_id.set(datasource.project_id.clone());
        self.database_url.set(datasource.database_url.clone());
        self.port.set(datasource.port.clone());
        self.database_name.set(datasource.database_name.clone());
        self.username.set(datasource.username.clone());
        self.password.set(datasource.password.clone());
    }

    /// Form contents over `base`, which carries the ids of an edited source.
    fn read(&self, base: PostgresqlDatasource) -> PostgresqlDatasource {
        PostgresqlDatasource {
            project_id: self.project_id.get().trim().to_string(),
            database_url: self.database_url.get().trim().to_string(),
            port: self.port.get().trim().to_string(),
            database_name: self.database_name.get().trim().to_string(),
            username: self.username.get().trim().to_string(),
            password: self.password.get(),
            ..base
        }
    }
}

/// State of the PostgreSQL connection form.
#[derive(Clone)]
pub struct DatasourceDetailsVm {
    pub fields: ConnectionFields,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    loaded: RwSignal<PostgresqlDatasource>,
    edit_project: Option<String>,
    bus: EventBus,
}

impl DatasourceDetailsVm {
    pub fn new(bus: EventBus, project_id: Option<String>) -> Self {
        let vm = Self {
            fields: ConnectionFields::new(),
            error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            loaded: RwSignal::new(PostgresqlDatasource::default()),
            edit_project: project_id.clone(),
            bus,
        };

        if let Some(project_id) = project_id {
            vm.load(project_id);
        }

        vm
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_project.is_some()
    }

    /// Current form contents; tracks every field.
    pub fn current(&self) -> PostgresqlDatasource {
        self.fields.read(self.loaded.get())
    }

    fn load(&self, project_id: String) {
        let fields = self.fields;
        let loaded = self.loaded;
        let error = self.error;
        let is_loading = self.is_loading;
        is_loading.set(true);

        spawn_local(async move {
            match api::fetch_by_project(&project_id).await {
                Ok(datasource) => {
                    fields.fill(&datasource);
                    loaded.set(datasource);
                }
                Err(e) => {
                    log::error!("Failed to load data source '{}': {}", project_id, e);
                    error.set(Some("Failed to load data source.".to_string()));
                }
            }
            is_loading.set(false);
        });
    }

    pub fn test_command(&self) {
        let current = self.current();
        if current.is_complete() {
            self.bus.publish(AppEvent::DatasourceTest(current));
        }
    }

    pub fn save_command(&self) {
        let current = self.current();
        if !current.is_complete() {
            self.error
                .set(Some("Fill in every field; the port has 4 to 6 digits.".to_string()));
            return;
        }
        self.error.set(None);
        self.bus.publish(AppEvent::DatasourceSave(current));
    }

    pub fn cancel_command(&self) {
        self.bus.publish(AppEvent::CloseDatasourceModal(false));
    }
}
