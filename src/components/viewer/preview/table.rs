//! CSV table renderer.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::MAX_TABLE_ROWS;
use crate::core::CsvTable;

stylance::import_crate_style!(css, "src/components/viewer/preview/table.module.css");

/// Notice shown when rows were dropped, `None` otherwise.
pub fn truncation_notice(table: &CsvTable) -> Option<String> {
    table.is_truncated().then(|| {
        format!(
            "Showing a preview of the first {} rows of {}.",
            MAX_TABLE_ROWS, table.total_rows
        )
    })
}

#[component]
pub fn CsvTableView(table: Arc<CsvTable>) -> impl IntoView {
    let notice = truncation_notice(&table);

    let header = table
        .headers
        .iter()
        .map(|h| view! { <th scope="col">{h.clone()}</th> })
        .collect_view();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|cell| view! { <td>{cell.clone()}</td> })
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class=css::wrapper>
            {notice.map(|n| view! { <p class=css::notice role="status">{n}</p> })}
            <table class=css::table>
                <thead><tr>{header}</tr></thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
