//! Client-side application state.
//!
//! Slices change only through [`Action`]s applied by [`reduce`]; components
//! read them through the derived signals of [`Store`].

mod reducer;
mod state;

pub use reducer::{reduce, Action};
pub use state::{AppState, DatasourceState, SqlState};

use contracts::domain::a001_datasource::aggregate::Datasource;
use contracts::shared::Document;
use contracts::system::auth::AuthUser;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AppState::default()),
        }
    }

    pub fn dispatch(&self, action: Action) {
        self.state.update(|state| reduce(state, action));
    }

    pub fn auth_user(&self) -> Signal<Option<AuthUser>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.auth_user.clone()))
    }

    pub fn datasource(&self) -> Signal<DatasourceState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.datasource.clone()))
    }

    pub fn active_datasource(&self) -> Signal<Option<Datasource>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.datasource.active.clone()))
    }

    pub fn sql(&self) -> Signal<SqlState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sql.clone()))
    }

    pub fn documents(&self) -> Signal<Vec<Document>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.documents.clone()))
    }

    pub fn collections(&self) -> Signal<Vec<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.collections.clone()))
    }

    /// Current state without tracking.
    pub fn snapshot(&self) -> AppState {
        self.state.get_untracked()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> Store {
    use_context::<Store>().expect("Store not provided in context")
}
