use contracts::domain::a002_chart::aggregate::{ChartInfo, ChartResult};
use leptos::ev;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::a002_chart::render::ChartView;
use crate::shared::components::sql_viewer::SqlViewer;
use crate::shared::events::{use_event_bus, AppEvent};
use crate::shared::icons::icon;

/// Generated SQL above the rendered chart, with the save action.
#[component]
pub fn ChartPreview(
    #[prop(into)]
    chart: Signal<Option<ChartResult>>,
    #[prop(into)]
    sql: Signal<String>,
) -> impl IntoView {
    let bus = use_event_bus();

    let save = move |_: ev::MouseEvent| {
        let Some(current) = chart.get_untracked() else {
            return;
        };
        match ChartInfo::from_result(&current) {
            Ok(info) => {
                bus.publish(AppEvent::SaveChart(info));
            }
            Err(e) => log::error!("{}", e),
        }
    };

    view! {
        <div class="panel chart-preview">
            <SqlViewer sql=sql />

            <div class="chart-preview__toolbar">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || chart.with(|c| c.is_none()))
                    on_click=save
                >
                    "Save Chart"
                </Button>
            </div>

            {move || match chart.get() {
                Some(current) => view! {
                    <div class="chart-preview__title">{current.title.clone()}</div>
                    <div class="chart-preview__body">
                        <ChartView chart=current />
                    </div>
                }
                    .into_any(),
                None => view! {
                    <div class="chart-preview__empty">
                        {icon("bar-chart")}
                        <p>"Configure your chart to see the preview"</p>
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}
