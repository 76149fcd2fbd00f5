use contracts::shared::Document;
use contracts::system::auth::AuthUser;

use super::state::{AppState, DatasourceState};

/// Every mutation the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddAuthUser(AuthUser),
    ClearAuthUser,
    AddDataSource(DatasourceState),
    ClearDataSource,
    AddSqlQuery(String),
    AddPromptSqlQuery(String),
    ClearSqlQuery,
    ClearPromptSqlQuery,
    AddDocuments(Vec<Document>),
    ClearDocuments,
    AddCollections(Vec<String>),
    ClearCollections,
    /// Reset every slice.
    Logout,
}

pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::AddAuthUser(user) => state.auth_user = Some(user),
        Action::ClearAuthUser => state.auth_user = None,
        Action::AddDataSource(datasource) => state.datasource = datasource,
        Action::ClearDataSource => state.datasource = DatasourceState::default(),
        Action::AddSqlQuery(sql) => state.sql.sql_query = sql,
        Action::AddPromptSqlQuery(prompt) => state.sql.prompt_query = prompt,
        Action::ClearSqlQuery => state.sql.sql_query.clear(),
        Action::ClearPromptSqlQuery => state.sql.prompt_query.clear(),
        Action::AddDocuments(documents) => state.documents = documents,
        Action::ClearDocuments => state.documents.clear(),
        Action::AddCollections(collections) => state.collections = dedupe(collections),
        Action::ClearCollections => state.collections.clear(),
        Action::Logout => *state = AppState::default(),
    }
}

/// Keeps the first occurrence of each name.
fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_datasource::aggregate::Datasource;

    fn datasource(id: &str, project: &str) -> Datasource {
        Datasource {
            id: id.into(),
            project_id: project.into(),
            source_type: "postgresql".into(),
            database: Some(format!("{}_db", project)),
        }
    }

    fn populated() -> AppState {
        let mut state = AppState::default();
        let mut row = Document::new();
        row.insert("id".into(), serde_json::json!(1));
        reduce(
            &mut state,
            Action::AddAuthUser(AuthUser {
                id: "u1".into(),
                email: "a@b.c".into(),
            }),
        );
        reduce(
            &mut state,
            Action::AddDataSource(DatasourceState::resolve(None, vec![datasource("d1", "shop")])),
        );
        reduce(&mut state, Action::AddSqlQuery("SELECT 1".into()));
        reduce(&mut state, Action::AddPromptSqlQuery("how many".into()));
        reduce(&mut state, Action::AddDocuments(vec![row]));
        reduce(&mut state, Action::AddCollections(vec!["orders".into()]));
        state
    }

    #[test]
    fn test_logout_resets_every_slice() {
        let mut state = populated();
        assert_ne!(state, AppState::default());
        reduce(&mut state, Action::Logout);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_add_collections_deduplicates_in_order() {
        let mut state = AppState::default();
        reduce(
            &mut state,
            Action::AddCollections(vec![
                "users".into(),
                "orders".into(),
                "users".into(),
                "items".into(),
                "orders".into(),
            ]),
        );
        assert_eq!(state.collections, vec!["users", "orders", "items"]);
    }

    #[test]
    fn test_clear_actions_touch_only_their_slice() {
        let mut state = populated();
        reduce(&mut state, Action::ClearSqlQuery);
        assert!(state.sql.sql_query.is_empty());
        assert_eq!(state.sql.prompt_query, "how many");

        reduce(&mut state, Action::ClearDocuments);
        assert!(state.documents.is_empty());
        assert_eq!(state.collections, vec!["orders"]);

        reduce(&mut state, Action::ClearDataSource);
        assert_eq!(state.datasource, DatasourceState::default());
        assert!(state.auth_user.is_some());
    }

    #[test]
    fn test_resolve_prefers_stored_project() {
        let available = vec![datasource("d1", "shop"), datasource("d2", "crm")];

        let resolved = DatasourceState::resolve(Some(datasource("d2", "crm")), available.clone());
        assert_eq!(resolved.active_project_id(), Some("crm"));
        assert_eq!(resolved.database.as_deref(), Some("crm_db"));

        let first = DatasourceState::resolve(None, available);
        assert_eq!(first.active_project_id(), Some("shop"));

        let none = DatasourceState::resolve(None, Vec::new());
        assert!(none.active.is_none());
        assert!(none.database.is_none());
    }

    #[test]
    fn test_replace_sources_keeps_or_moves_active() {
        let state = DatasourceState::resolve(None, vec![datasource("d1", "shop"), datasource("d2", "crm")]);

        let created = state.replace_sources(
            vec![datasource("d1", "shop"), datasource("d2", "crm"), datasource("d3", "hr")],
            Some("hr"),
        );
        assert_eq!(created.active_project_id(), Some("hr"));

        let kept = state.replace_sources(vec![datasource("d2", "crm"), datasource("d1", "shop")], None);
        assert_eq!(kept.active_project_id(), Some("shop"));

        let deleted = state.replace_sources(vec![datasource("d2", "crm")], None);
        assert_eq!(deleted.active_project_id(), Some("crm"));

        let empty = state.replace_sources(Vec::new(), None);
        assert!(empty.active.is_none());
    }

    #[test]
    fn test_select_known_and_unknown_id() {
        let state = DatasourceState::resolve(None, vec![datasource("d1", "shop"), datasource("d2", "crm")]);
        assert_eq!(state.select("d2").unwrap().active_project_id(), Some("crm"));
        assert!(state.select("missing").is_none());
    }
}
