use contracts::domain::a002_chart::aggregate::value_as_label;
use contracts::shared::Document;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

/// Read-only grid over result rows. Columns are the union of the row keys.
#[component]
pub fn DataTable(
    #[prop(into)]
    columns: Signal<Vec<String>>,
    #[prop(into)]
    rows: Signal<Vec<Document>>,
) -> impl IntoView {
    view! {
        <div class="data-table">
            <Table>
                <TableHeader>
                    <TableRow>
                        {move || {
                            columns
                                .get()
                                .into_iter()
                                .map(|c| view! { <TableHeaderCell>{c}</TableHeaderCell> })
                                .collect_view()
                        }}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let cols = columns.get();
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                let cells = cols
                                    .iter()
                                    .map(|c| {
                                        let text = row.get(c).map(value_as_label).unwrap_or_default();
                                        view! { <TableCell>{text}</TableCell> }
                                    })
                                    .collect_view();
                                view! { <TableRow>{cells}</TableRow> }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
