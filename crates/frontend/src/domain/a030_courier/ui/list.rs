use crate::shared::date_utils::format_date;
use contracts::domain::a030_courier::{CourierRecord, MISSING_VALUE};
use leptos::prelude::*;

/// Columns of the directory table: (header, record key)
pub const LIST_COLUMNS: [(&str, &str); 6] = [
    ("Name", "Name"),
    ("Joining Date", "Joining_Date"),
    ("Status", "Status"),
    ("ID Number", "ID_Number"),
    ("Sponsorship", "Sponsorshipstatus"),
    ("BARQ ID", "BARQ_ID"),
];

pub fn list_cell(record: &CourierRecord, key: &str) -> String {
    match record.text(key) {
        Some(date) if key == "Joining_Date" => format_date(&date),
        Some(value) => value,
        None => MISSING_VALUE.to_string(),
    }
}

/// Current page of couriers, or the inline message when there is one
#[component]
pub fn CourierList(
    #[prop(into)] rows: Signal<Vec<CourierRecord>>,
    #[prop(into)] message: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        {move || match message.get() {
            Some(text) => view! { <p class="empty-state" id="courierListMessage">{text}</p> }.into_any(),
            None => view! {
                <div class="table-container">
                    <table class="data-table" id="courierTable">
                        <thead>
                            <tr>
                                {LIST_COLUMNS.iter().map(|(header, _)| view! { <th>{*header}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {rows.get().into_iter().map(|record| {
                                let barq_id = record.barq_id();
                                let clickable = barq_id.is_some();
                                view! {
                                    <tr
                                        class=if clickable { "data-table__row data-table__row--clickable" } else { "data-table__row" }
                                        on:click=move |_| {
                                            if let Some(id) = barq_id.clone() {
                                                on_select.run(id);
                                            }
                                        }
                                    >
                                        {LIST_COLUMNS.iter().map(|(_, key)| view! {
                                            <td>{list_cell(&record, key)}</td>
                                        }).collect_view()}
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a030_courier::fixtures::courier;

    #[test]
    fn cells_format_dates_and_fill_missing() {
        let record = courier("5521", "Active");
        assert_eq!(list_cell(&record, "Joining_Date"), "01/07/2022");
        assert_eq!(list_cell(&record, "ID_Number"), MISSING_VALUE);
        assert_eq!(list_cell(&record, "Sponsorshipstatus"), MISSING_VALUE);
        assert_eq!(list_cell(&record, "BARQ_ID"), "5521");
    }
}
