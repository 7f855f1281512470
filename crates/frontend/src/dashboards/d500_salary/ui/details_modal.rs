use crate::dashboards::d500_salary::columns::{cell_text, COLUMNS};
use crate::shared::modal::Modal;
use contracts::dashboards::d500_salary::SalaryRecord;
use leptos::prelude::*;

/// Every data column of one row, formatted like the table
#[component]
pub fn SalaryDetailsModal(
    record: SalaryRecord,
    #[prop(into)] currency: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("Salary Details: {}", record.display_name());
    let rows = COLUMNS
        .iter()
        .map(|column| (column.header, cell_text(&record, column, &currency)))
        .collect::<Vec<_>>();

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            <table class="details-table">
                <tbody>
                    {rows.into_iter().map(|(label, value)| view! {
                        <tr>
                            <th>{label}</th>
                            <td>{value}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </Modal>
    }
}
