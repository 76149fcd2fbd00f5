pub mod state;

use self::state::{create_state, ChartDataView, ChartFilter};
use contracts::domain::a002_chart::aggregate::{ChartInfo, ChartKind};
use contracts::dashboards::d001_query_dashboard::dto::column_names;
use contracts::shared::date_utils::format_timestamp;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance, Spinner};

use crate::domain::a002_chart::api;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::store::use_store;

fn kind_icon(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Number => "hash",
        ChartKind::Bar => "bar-chart",
        ChartKind::Line => "line-chart",
        ChartKind::Pie => "pie-chart",
    }
}

/// Saved charts of the signed-in user.
#[component]
pub fn ChartList() -> impl IntoView {
    let store = use_store();
    let toast = use_toast();
    let navigate = use_navigate();
    let state = create_state();
    let auth_user = store.auth_user();

    Effect::new(move |_| {
        let Some(user) = auth_user.get() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_charts(&user.id).await {
                Ok(charts) => {
                    log!("Loaded {} charts", charts.len());
                    state.update(|s| {
                        s.charts = charts;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load charts: {}", e);
                    state.update(|s| s.is_loaded = true);
                }
            }
        });
    });

    let open_data = move |chart: ChartInfo| match chart.data_view_records() {
        Ok(rows) => state.update(|s| {
            s.data_view = Some(ChartDataView {
                title: chart.chart_name.clone(),
                rows,
            })
        }),
        Err(e) => log::warn!("Chart {:?} has unreadable data: {}", chart.id, e),
    };

    let delete_chart = move |chart_id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to delete this chart?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let toast = toast.clone();
        spawn_local(async move {
            match api::delete(&chart_id).await {
                Ok(deleted) => {
                    state.update(|s| s.remove(&deleted.id));
                    toast.success("Chart deleted successfully.");
                }
                Err(e) => {
                    log::error!("Failed to delete chart {}: {}", chart_id, e);
                    toast.error("Error deleting chart.");
                }
            }
        });
    };

    let create_chart = {
        let navigate = navigate.clone();
        move || navigate("/charts/create", Default::default())
    };

    let create_chart_header = create_chart.clone();

    view! {
        <div class="page chart-list-page">
            <PageHeader title="My Charts" subtitle="View and manage your saved charts">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click={
                        let create_chart = create_chart_header.clone();
                        move |_| create_chart()
                    }
                >
                    {icon("plus")}
                    "Create Chart"
                </Button>
            </PageHeader>

            <div class="filter-pills">
                {ChartFilter::options()
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class=move || {
                                    if state.with(|s| s.filter == filter) {
                                        "filter-pill filter-pill--active"
                                    } else {
                                        "filter-pill"
                                    }
                                }
                                on:click=move |_| state.update(|s| s.filter = filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                if !state.with(|s| s.is_loaded) {
                    return view! { <div class="page-loading"><Spinner /></div> }.into_any();
                }
                let visible = state.with(|s| s.visible());
                if visible.is_empty() {
                    let create_chart = create_chart.clone();
                    return view! {
                        <div class="empty-state">
                            {icon("bar-chart")}
                            <h3>"No charts found"</h3>
                            <p>"Get started by creating a new chart."</p>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| create_chart()>
                                {icon("plus")}
                                "Create New Chart"
                            </Button>
                        </div>
                    }
                        .into_any();
                }

                let navigate = navigate.clone();
                view! {
                    <div class="card-grid card-grid--charts">
                        {visible
                            .into_iter()
                            .map(|chart| {
                                let chart_id = chart.id.clone().unwrap_or_default();
                                let edit_id = chart_id.clone();
                                let navigate = navigate.clone();
                                let delete_chart = delete_chart.clone();
                                let title = chart.chart_name.clone();
                                let project = chart.project_id.clone().unwrap_or_default();
                                let kind = chart.chart_type;
                                let created = chart.created_at.as_deref().map(format_timestamp).unwrap_or_default();
                                view! {
                                    <div class="card">
                                        <div class="card__title" title=title.clone()>
                                            {icon(kind_icon(kind))}
                                            <h2>{title.clone()}</h2>
                                        </div>
                                        <div class="card__meta">
                                            <span title=project.clone()>{project.clone()}</span>
                                            " | "
                                            <span>{kind.as_str().to_uppercase()}</span>
                                            <span class="card__date">{created}</span>
                                        </div>
                                        <div class="card__actions">
                                            <button
                                                class="button button--icon"
                                                title="View data"
                                                on:click=move |_| open_data(chart.clone())
                                            >
                                                {icon("eye")}
                                            </button>
                                            <button
                                                class="button button--icon"
                                                title="Edit"
                                                on:click=move |_| {
                                                    navigate(&format!("/charts/edit/{}", edit_id), Default::default())
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--icon button--danger"
                                                title="Delete"
                                                on:click=move |_| delete_chart(chart_id.clone())
                                            >
                                                {icon("trash")}
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}

            {move || {
                state.with(|s| s.data_view.clone()).map(|data_view| {
                    let columns = column_names(&data_view.rows);
                    let ChartDataView { title, rows } = data_view;
                    view! {
                        <Modal
                            title="Chart Data"
                            class="modal--wide"
                            on_close=Callback::new(move |_| state.update(|s| s.data_view = None))
                        >
                            {(!title.is_empty()).then(|| view! { <p class="modal-subtitle">{title}</p> })}
                            <p>"The following chart data is used to render this visualization."</p>
                            <DataTable columns=Signal::stored(columns) rows=Signal::stored(rows) />
                        </Modal>
                    }
                })
            }}
        </div>
    }
}
