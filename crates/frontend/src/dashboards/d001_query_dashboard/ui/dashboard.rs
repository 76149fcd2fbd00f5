use contracts::shared::Document;
use leptos::prelude::*;

use super::data_sidebar::DataSidebar;
use super::prompt_editor::PromptEditor;
use super::result_table::ResultTable;
use super::sql_editor::SqlEditor;
use crate::store::use_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Prompt,
    Query,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Prompt => "Prompt",
            Tab::Query => "Query",
        }
    }
}

#[component]
pub fn QueryDashboard() -> impl IntoView {
    let store = use_store();
    let auth_user = store.auth_user();
    let documents = store.documents();
    let tab = RwSignal::new(Tab::Prompt);
    let is_loading = RwSignal::new(false);
    let prompt_rows = RwSignal::new(Vec::<Document>::new());

    // Fresh query rows bring the query tab forward.
    Effect::new(move |_| {
        if documents.with(|d| !d.is_empty()) {
            tab.set(Tab::Query);
        }
    });

    let rows = Signal::derive(move || match tab.get() {
        Tab::Prompt => prompt_rows.get(),
        Tab::Query => documents.get(),
    });

    view! {
        <div class="query-dashboard">
            <div class="query-dashboard__main">
                <header class="query-dashboard__header">
                    <h1>"Query Dashboard"</h1>
                    <div class="query-dashboard__user">
                        {move || auth_user.get().map(|u| u.email).unwrap_or_default()}
                    </div>
                </header>

                <div class="tabs">
                    {[Tab::Prompt, Tab::Query]
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class=move || if tab.get() == t { "tab tab--active" } else { "tab" }
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="query-dashboard__editor">
                    {move || match tab.get() {
                        Tab::Prompt => view! {
                            <PromptEditor
                                is_loading=is_loading
                                on_result=Callback::new(move |result| prompt_rows.set(result))
                            />
                        }
                            .into_any(),
                        Tab::Query => view! { <SqlEditor is_loading=is_loading /> }.into_any(),
                    }}
                </div>

                <ResultTable rows=rows is_loading=is_loading />
            </div>
            <DataSidebar />
        </div>
    }
}
