mod configuration;
mod preview;
pub mod state;

pub use configuration::ChartConfigurationPanel;
pub use preview::ChartPreview;

use self::state::{create_state, ChartDraft};
use contracts::domain::a002_chart::aggregate::{ChartConfiguration, ChartInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::{Button, ButtonAppearance, Spinner};

use crate::domain::a002_chart::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::events::{subscribe_scoped, AppEvent, EventType};
use crate::shared::toast::{use_toast, ToastService};
use crate::store::{use_store, Store};

const LOAD_FAILED: &str = "Failed to return chart data.";

/// Create a chart from a prompt, or edit the one named by `:chartId`.
#[component]
pub fn ChartCreation() -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let navigate = use_navigate();
    let params = use_params_map();
    let draft = create_state();
    let loaded = RwSignal::new(None::<ChartInfo>);

    let chart_id = params.with_untracked(|p| p.get("chartId"));
    let is_edit = chart_id.is_some();

    if let Some(chart_id) = chart_id {
        load_chart(chart_id, draft, loaded, toast.clone());
    }

    {
        let toast = toast.clone();
        subscribe_scoped(EventType::GenerateChart, move |event| {
            if let AppEvent::GenerateChart(config) = event {
                generate_chart(config.clone(), draft, toast.clone());
            }
        });
    }
    {
        let toast = toast.clone();
        let navigate = navigate.clone();
        subscribe_scoped(EventType::SaveChart, move |event| {
            if let AppEvent::SaveChart(info) = event {
                let navigate = navigate.clone();
                save_chart(info.clone(), draft, store, toast.clone(), move || {
                    navigate("/charts", Default::default())
                });
            }
        });
    }
    subscribe_scoped(EventType::ChartChange, move |event| {
        if let AppEvent::ChartChange(chart) = event {
            draft.update(|d| d.chart = Some(chart.clone()));
        }
    });

    let chart = Signal::derive(move || draft.with(|d| d.chart.clone()));
    let generated = Signal::derive(move || draft.with(|d| d.generated.clone()));
    let sql = Signal::derive(move || draft.with(|d| d.sql.clone()));
    let title = if is_edit { "Edit Chart" } else { "Create New Chart" };

    view! {
        <div class="page chart-creation-page">
            <Show when=move || draft.with(|d| d.is_loading)>
                <div class="page-overlay">
                    <Spinner />
                </div>
            </Show>

            <PageHeader
                title=title
                subtitle="Select your data source and describe the chart you want to create"
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigate("/charts", Default::default())
                >
                    "Cancel"
                </Button>
            </PageHeader>

            <div class="chart-creation__grid">
                <div class="chart-creation__config">
                    <ChartConfigurationPanel chart=chart generated=generated loaded=loaded />
                </div>
                <div class="chart-creation__preview">
                    <ChartPreview chart=chart sql=sql />
                </div>
            </div>
        </div>
    }
}

fn load_chart(
    chart_id: String,
    draft: RwSignal<ChartDraft>,
    loaded: RwSignal<Option<ChartInfo>>,
    toast: ToastService,
) {
    draft.update(|d| d.is_loading = true);
    spawn_local(async move {
        let result = api::fetch_chart(&chart_id)
            .await
            .map_err(|e| e.to_string())
            .and_then(|info| {
                let mut next = ChartDraft::default();
                next.apply_saved(&info)?;
                Ok((info, next))
            });
        match result {
            Ok((info, next)) => {
                draft.set(next);
                loaded.set(Some(info));
            }
            Err(e) => {
                log::error!("Failed to load chart {}: {}", chart_id, e);
                draft.update(|d| d.is_loading = false);
                toast.error(LOAD_FAILED);
            }
        }
    });
}

fn generate_chart(config: ChartConfiguration, draft: RwSignal<ChartDraft>, toast: ToastService) {
    draft.update(|d| {
        d.prompt = config.user_prompt.clone();
        d.is_loading = true;
    });
    spawn_local(async move {
        match api::generate_chart(&config).await {
            Ok(generated) => draft.update(|d| {
                d.apply_generated(generated, &config.user_prompt);
                d.is_loading = false;
            }),
            Err(e) => {
                log::error!("Chart generation failed: {}", e);
                draft.update(|d| d.is_loading = false);
                toast.error(LOAD_FAILED);
            }
        }
    });
}

fn save_chart<F>(
    preview: ChartInfo,
    draft: RwSignal<ChartDraft>,
    store: Store,
    toast: ToastService,
    on_saved: F,
) where
    F: FnOnce() + 'static,
{
    let state = store.snapshot();
    let datasource_id = state
        .datasource
        .active
        .as_ref()
        .map(|d| d.id.clone())
        .unwrap_or_default();
    let user_id = state.auth_user.map(|u| u.id).unwrap_or_default();

    let info = match draft.with_untracked(|d| d.to_chart_info(preview, &datasource_id, &user_id)) {
        Ok(info) => info,
        Err(e) => {
            log::error!("{}", e);
            toast.error(LOAD_FAILED);
            return;
        }
    };

    spawn_local(async move {
        let result = match info.id.as_deref() {
            Some(chart_id) => api::update(chart_id, &info).await,
            None => api::create(&info).await,
        };
        match result {
            Ok(_) => {
                toast.success(if info.id.is_some() {
                    "Chart updated successfully."
                } else {
                    "Chart saved successfully."
                });
                on_saved();
            }
            Err(e) => {
                log::error!("Saving chart failed: {}", e);
                toast.error(LOAD_FAILED);
            }
        }
    });
}
