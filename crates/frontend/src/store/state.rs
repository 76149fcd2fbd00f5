use contracts::domain::a001_datasource::aggregate::Datasource;
use contracts::shared::Document;
use contracts::system::auth::AuthUser;

/// Active data source and the list it was picked from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasourceState {
    pub active: Option<Datasource>,
    pub database: Option<String>,
    pub data_source: Vec<Datasource>,
}

impl DatasourceState {
    /// Selection at session start: the stored project when there is one,
    /// else the first available source.
    pub fn resolve(stored: Option<Datasource>, available: Vec<Datasource>) -> Self {
        let active = stored.or_else(|| available.first().cloned());
        Self {
            database: active.as_ref().and_then(|d| d.database.clone()),
            active,
            data_source: available,
        }
    }

    /// Same list with `id` marked active; `None` when `id` is unknown.
    pub fn select(&self, id: &str) -> Option<Self> {
        let active = self.data_source.iter().find(|d| d.id == id)?.clone();
        Some(Self {
            database: active.database.clone(),
            active: Some(active),
            data_source: self.data_source.clone(),
        })
    }

    /// New source list after a create, edit or delete. The active source is
    /// the one for `prefer_project` if listed, else the current one if still
    /// listed, else the first.
    pub fn replace_sources(&self, sources: Vec<Datasource>, prefer_project: Option<&str>) -> Self {
        let preferred = prefer_project
            .and_then(|project| sources.iter().find(|d| d.project_id == project));
        let current = self
            .active
            .as_ref()
            .and_then(|active| sources.iter().find(|d| d.id == active.id));
        let active = preferred.or(current).or(sources.first()).cloned();
        Self {
            database: active.as_ref().and_then(|d| d.database.clone()),
            active,
            data_source: sources,
        }
    }

    pub fn active_project_id(&self) -> Option<&str> {
        self.active.as_ref().map(|d| d.project_id.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlState {
    pub prompt_query: String,
    pub sql_query: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub auth_user: Option<AuthUser>,
    pub datasource: DatasourceState,
    pub sql: SqlState,
    pub documents: Vec<Document>,
    pub collections: Vec<String>,
}
