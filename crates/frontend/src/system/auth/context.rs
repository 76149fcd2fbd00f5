use contracts::system::auth::AuthPayload;

use super::api;
use crate::shared::storage;
use crate::store::{Action, DatasourceState, Store};

/// Load a signed-in session into the store. Returns `false` when the
/// payload carries no user.
pub fn apply_auth_payload(store: Store, payload: AuthPayload) -> bool {
    let Some(user) = payload.user else {
        return false;
    };

    store.dispatch(Action::AddAuthUser(user));

    let datasource = DatasourceState::resolve(storage::load_active_project(), payload.project_ids);
    if let Some(active) = &datasource.active {
        storage::save_active_project(active);
    }
    store.dispatch(Action::AddDataSource(datasource));
    store.dispatch(Action::AddCollections(payload.collections));
    true
}

/// End the session on the server and drop every trace of it locally.
pub async fn sign_out(store: Store) {
    if let Err(e) = api::logout().await {
        log::warn!("Logout request failed: {}", e);
    }
    storage::clear_active_project();
    store.dispatch(Action::Logout);
}
