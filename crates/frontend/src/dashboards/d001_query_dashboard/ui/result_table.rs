use contracts::dashboards::d001_query_dashboard::dto::{column_names, page_count, page_slice};
use contracts::shared::Document;
use leptos::prelude::*;
use thaw::Spinner;

use crate::shared::components::data_table::DataTable;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;

/// Paged view over query rows. Returns to the first page whenever the rows
/// are replaced.
#[component]
pub fn ResultTable(
    #[prop(into)]
    rows: Signal<Vec<Document>>,
    #[prop(into)]
    is_loading: Signal<bool>,
) -> impl IntoView {
    let page_size = AppConfig::load().page_size;
    let page = RwSignal::new(0usize);

    Effect::new(move |_| {
        rows.track();
        page.set(0);
    });

    let total_count = Signal::derive(move || rows.with(|r| r.len()));
    let total_pages = Signal::derive(move || page_count(total_count.get(), page_size));
    let columns = Signal::derive(move || rows.with(|r| column_names(r)));
    let page_rows = Signal::derive(move || rows.with(|r| page_slice(r, page.get(), page_size).to_vec()));

    view! {
        <div class="result-table">
            <div class="result-table__header">
                <h3>"Query Results"</h3>
                <Show when=move || { total_count.get() > 0 }>
                    <PaginationControls
                        current_page=page
                        total_pages=total_pages
                        total_count=total_count
                        on_page_change=Callback::new(move |p| page.set(p))
                    />
                </Show>
            </div>

            <Show
                when=move || { total_count.get() > 0 }
                fallback=|| view! { <div class="empty-state">"No results yet."</div> }
            >
                <DataTable columns=columns rows=page_rows />
            </Show>

            <Show when=move || is_loading.get()>
                <div class="result-table__overlay">
                    <Spinner />
                </div>
            </Show>
        </div>
    }
}
