use contracts::shared::sql::format_generated_sql;
use contracts::shared::Document;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Textarea};

use crate::dashboards::d001_query_dashboard::api;
use crate::shared::components::sql_viewer::SqlViewer;
use crate::shared::toast::use_toast;
use crate::store::{use_store, Action};

/// Question in plain language; shows the SQL the API wrote for it.
#[component]
pub fn PromptEditor(
    is_loading: RwSignal<bool>,
    /// Receives the rows of each answer; an empty list on clear.
    on_result: Callback<Vec<Document>>,
) -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let prompt = RwSignal::new(String::new());
    let generated_sql = Signal::derive(move || store.sql().with(|s| s.prompt_query.clone()));

    let run = move |_: ev::MouseEvent| {
        let text = prompt.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let Some(project_id) = store.snapshot().datasource.active_project_id().map(str::to_string)
        else {
            toast.warning("Select a data source first.");
            return;
        };

        let toast = toast.clone();
        is_loading.set(true);
        spawn_local(async move {
            match api::ask(&project_id, &text).await {
                Ok(answer) => {
                    store.dispatch(Action::AddPromptSqlQuery(format_generated_sql(&answer.sql)));
                    on_result.run(answer.result);
                }
                Err(e) => {
                    log::error!("Prompt query failed: {}", e);
                    toast.error("Failed to return data.");
                }
            }
            is_loading.set(false);
        });
    };

    let clear = move |_: ev::MouseEvent| {
        prompt.set(String::new());
        on_result.run(Vec::new());
        store.dispatch(Action::ClearPromptSqlQuery);
        store.dispatch(Action::ClearDocuments);
    };

    view! {
        <div class="editor prompt-editor">
            <div class="editor__toolbar">
                <Button appearance=ButtonAppearance::Secondary on_click=clear>
                    "Clear"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || prompt.with(|p| p.trim().is_empty()))
                    on_click=run
                >
                    "Run Query"
                </Button>
            </div>
            <Textarea value=prompt placeholder="Show me all users who signed up in the last month" />
            <div class="editor__generated">
                <h3>"Generated SQL"</h3>
                <SqlViewer sql=generated_sql placeholder="No SQL generated yet" />
            </div>
        </div>
    }
}
