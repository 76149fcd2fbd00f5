use contracts::domain::a002_chart::aggregate::{ChartConfiguration, ChartInfo, ChartKind, ChartResult};
use leptos::ev;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Select, Textarea};

use crate::shared::events::{use_event_bus, AppEvent};
use crate::shared::icons::icon;
use crate::shared::storage;
use crate::store::{use_store, Action};

fn kind_icon(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Number => "hash",
        ChartKind::Bar => "bar-chart",
        ChartKind::Line => "line-chart",
        ChartKind::Pie => "pie-chart",
    }
}

/// Data source, chart type and prompt for a chart request.
///
/// Picking a type while a chart is shown republishes it in the new type
/// without asking the API again.
#[component]
pub fn ChartConfigurationPanel(
    #[prop(into)]
    chart: Signal<Option<ChartResult>>,
    #[prop(into)]
    generated: Signal<Option<ChartResult>>,
    /// Stored chart being edited; fills the form once it arrives.
    #[prop(into)]
    loaded: Signal<Option<ChartInfo>>,
) -> impl IntoView {
    let bus = use_event_bus();
    let store = use_store();
    let datasource = store.datasource();

    let project = RwSignal::new(
        store
            .snapshot()
            .datasource
            .active_project_id()
            .unwrap_or_default()
            .to_string(),
    );
    let prompt = RwSignal::new(String::new());
    let kind = RwSignal::new(None::<ChartKind>);

    Effect::new(move |_| {
        if let Some(info) = loaded.get() {
            if let Some(project_id) = info.project_id.clone() {
                project.set(project_id);
            }
            prompt.set(info.prompt.clone());
            kind.set(Some(info.chart_type));
        }
    });

    // The picked project becomes the active data source.
    Effect::new(move |_| {
        let project_id = project.get();
        let current = store.snapshot().datasource;
        if current.active_project_id() == Some(project_id.as_str()) {
            return;
        }
        let Some(id) = current
            .data_source
            .iter()
            .find(|d| d.project_id == project_id)
            .map(|d| d.id.clone())
        else {
            return;
        };
        if let Some(next) = current.select(&id) {
            storage::sync_active_project(next.active.as_ref());
            store.dispatch(Action::AddDataSource(next));
        }
    });

    let configuration = move || ChartConfiguration {
        project_id: project.get(),
        user_prompt: prompt.get(),
        chart_type: kind.get(),
    };
    let is_valid = Signal::derive(move || configuration().is_valid());

    let select_kind = {
        let bus = bus.clone();
        move |next: ChartKind| {
            kind.set(Some(next));
            let Some(current) = chart.get_untracked() else {
                return;
            };
            if let Some(switched) = current.switch_kind(generated.get_untracked().as_ref(), next) {
                bus.publish(AppEvent::ChartChange(switched));
            }
        }
    };

    let generate = move |_: ev::MouseEvent| {
        let config = configuration();
        if config.is_valid() {
            bus.publish(AppEvent::GenerateChart(config));
        }
    };

    view! {
        <div class="panel chart-configuration">
            <h2 class="panel__title">"Chart Configuration"</h2>

            <div class="form-group">
                <label>"Data Source"</label>
                <Select value=project>
                    <option value="" disabled=true>"Select datasource"</option>
                    {move || {
                        let sources = datasource.get().data_source;
                        if sources.is_empty() {
                            return view! { <option value="" disabled=true>"No datasource"</option> }.into_any();
                        }
                        sources
                            .into_iter()
                            .map(|d| {
                                let value = d.project_id.clone();
                                view! { <option value=value>{d.project_id}</option> }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </Select>
            </div>

            <div class="form-group">
                <label>"Chart Type"</label>
                <div class="chart-type-grid">
                    {ChartKind::all()
                        .into_iter()
                        .map(|option| {
                            let select_kind = select_kind.clone();
                            view! {
                                <button
                                    class=move || {
                                        if kind.get() == Some(option) {
                                            "chart-type chart-type--active"
                                        } else {
                                            "chart-type"
                                        }
                                    }
                                    on:click=move |_| select_kind(option)
                                >
                                    {icon(kind_icon(option))}
                                    {option.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="form-group">
                <label>"Prompt"</label>
                <Textarea
                    value=prompt
                    placeholder="Example: Show me monthly sales trends as a bar chart with revenue on the y-axis"
                />
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || !is_valid.get())
                on_click=generate
            >
                "Generate Chart"
            </Button>
        </div>
    }
}
