use contracts::domain::a001_datasource::aggregate::Datasource;
use web_sys::window;

const ACTIVE_PROJECT_KEY: &str = "activeProject";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Remember the selected data source across reloads within the session.
pub fn save_active_project(datasource: &Datasource) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(datasource) {
        Ok(json) => {
            let _ = storage.set_item(ACTIVE_PROJECT_KEY, &json);
        }
        Err(e) => log::warn!("Failed to serialize active project: {}", e),
    }
}

/// Stored data source; `None` when absent or unreadable.
pub fn load_active_project() -> Option<Datasource> {
    let raw = get_local_storage()?.get_item(ACTIVE_PROJECT_KEY).ok()??;
    parse_active_project(&raw)
}

/// Store `active`, or drop the key when there is none.
pub fn sync_active_project(active: Option<&Datasource>) {
    match active {
        Some(datasource) => save_active_project(datasource),
        None => clear_active_project(),
    }
}

pub fn clear_active_project() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACTIVE_PROJECT_KEY);
    }
}

fn parse_active_project(raw: &str) -> Option<Datasource> {
    if raw.is_empty() || raw == "undefined" || raw == "null" {
        return None;
    }
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_active_project() {
        assert!(parse_active_project("undefined").is_none());
        assert!(parse_active_project("{broken").is_none());
        let ds = parse_active_project(r#"{"id":"1","projectId":"shop","type":"postgresql","database":"shop_db"}"#)
            .unwrap();
        assert_eq!(ds.project_id, "shop");
    }
}
