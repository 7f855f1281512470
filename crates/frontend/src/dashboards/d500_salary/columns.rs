//! Column catalogue of the salary table. The CSV export, the details modal
//! and the search index all read from the same list.

use crate::shared::date_utils::{format_date_opt, parse_date};
use crate::shared::list_utils::{cmp_opt_f64, cmp_opt_str, Sortable};
use crate::shared::number_format::{format_currency_opt, format_plain};
use contracts::dashboards::d500_salary::SalaryRecord;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    Number,
    Currency,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Wire name, also the sort key
    pub key: &'static str,
    pub header: &'static str,
    pub format: CellFormat,
}

const fn col(key: &'static str, header: &'static str, format: CellFormat) -> Column {
    Column { key, header, format }
}

pub const ACTIONS_HEADER: &str = "Actions";

/// Data columns in display order
pub const COLUMNS: &[Column] = &[
    col("BARQ_ID", "BARQ ID", CellFormat::Text),
    col("Name", "Name", CellFormat::Text),
    col("iban", "IBAN", CellFormat::Text),
    col("id_number", "ID Number", CellFormat::Text),
    col("joining_Date", "Joining Date", CellFormat::Date),
    col("Status", "Status", CellFormat::Text),
    col("Sponsorshipstatus", "Sponsorship Status", CellFormat::Text),
    col("PROJECT", "Project", CellFormat::Text),
    col("Supervisor", "Supervisor", CellFormat::Text),
    col("Total_Orders", "Total Orders", CellFormat::Number),
    col("Total_Revenue", "Total Revenue", CellFormat::Currency),
    col("Gas_Usage", "Gas Usage", CellFormat::Currency),
    col("Basic_Salary", "Basic Salary", CellFormat::Currency),
    col("Bonus_Amount", "Bonus Amount", CellFormat::Currency),
    col("Gas_Deserved", "Gas Deserved", CellFormat::Currency),
    col("Gas_Difference", "Gas Difference", CellFormat::Currency),
    col("Total_Salary", "Total Salary", CellFormat::Currency),
    col("period.start_date", "Start Period", CellFormat::Date),
    col("period.end_date", "End Period", CellFormat::Date),
    col("target", "Target", CellFormat::Number),
    col("days_since_joining", "Days Since Joining", CellFormat::Number),
];

/// Raw value of one cell before formatting
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue<'a> {
    Text(Option<&'a str>),
    Number(Option<f64>),
}

pub fn cell_value<'a>(record: &'a SalaryRecord, key: &str) -> CellValue<'a> {
    use CellValue::{Number, Text};
    match key {
        "BARQ_ID" => Text(record.barq_id.as_deref()),
        "Name" => Text(record.name.as_deref()),
        "iban" => Text(record.iban.as_deref()),
        "id_number" => Text(record.id_number.as_deref()),
        "joining_Date" => Text(record.joining_date.as_deref()),
        "Status" => Text(record.status.as_deref()),
        "Sponsorshipstatus" => Text(record.sponsorship_status.as_deref()),
        "PROJECT" => Text(record.project.as_deref()),
        "Supervisor" => Text(record.supervisor.as_deref()),
        "Total_Orders" => Number(record.total_orders),
        "Total_Revenue" => Number(record.total_revenue),
        "Gas_Usage" => Number(record.gas_usage),
        "Basic_Salary" => Number(record.basic_salary),
        "Bonus_Amount" => Number(record.bonus_amount),
        "Gas_Deserved" => Number(record.gas_deserved),
        "Gas_Difference" => Number(record.gas_difference),
        "Total_Salary" => Number(record.total_salary),
        "period.start_date" => Text(record.period_start()),
        "period.end_date" => Text(record.period_end()),
        "target" => Number(record.target()),
        "days_since_joining" => Number(record.days_since_joining),
        _ => Text(None),
    }
}

/// Formatted cell text; missing values are empty
pub fn cell_text(record: &SalaryRecord, column: &Column, currency: &str) -> String {
    match (cell_value(record, column.key), column.format) {
        (CellValue::Number(v), CellFormat::Currency) => format_currency_opt(v, currency),
        (CellValue::Number(v), _) => format_plain(v),
        (CellValue::Text(v), CellFormat::Date) => format_date_opt(v),
        (CellValue::Text(v), _) => v.unwrap_or_default().to_string(),
    }
}

/// Everything a row shows, for the free-text search
pub fn row_text(record: &SalaryRecord, currency: &str) -> String {
    COLUMNS
        .iter()
        .map(|c| cell_text(record, c, currency))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Sortable for SalaryRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let format = COLUMNS
            .iter()
            .find(|c| c.key == field)
            .map(|c| c.format)
            .unwrap_or(CellFormat::Text);

        match (cell_value(self, field), cell_value(other, field)) {
            (CellValue::Number(a), CellValue::Number(b)) => cmp_opt_f64(a, b),
            (CellValue::Text(a), CellValue::Text(b)) if format == CellFormat::Date => {
                a.and_then(parse_date).cmp(&b.and_then(parse_date))
            }
            (CellValue::Text(a), CellValue::Text(b)) => cmp_opt_str(a, b),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::sort_list;
    use crate::dashboards::d500_salary::fixtures::record as sample;

    #[test]
    fn twenty_one_data_columns() {
        assert_eq!(COLUMNS.len(), 21);
        assert_eq!(COLUMNS[0].header, "BARQ ID");
        assert_eq!(COLUMNS[20].header, "Days Since Joining");
    }

    #[test]
    fn cells_are_formatted_by_column_kind() {
        let record = sample("Faisal", 2980.4);
        let by_header = |h: &str| {
            let column = COLUMNS.iter().find(|c| c.header == h).unwrap();
            cell_text(&record, column, "SAR")
        };
        assert_eq!(by_header("Total Salary"), "SAR 2,980.40");
        assert_eq!(by_header("Joining Date"), "11/02/2023");
        assert_eq!(by_header("Start Period"), "25/02/2024");
        assert_eq!(by_header("Total Orders"), "412");
        assert_eq!(by_header("IBAN"), "");
        assert_eq!(by_header("Bonus Amount"), "");
    }

    #[test]
    fn row_text_contains_formatted_values() {
        let text = row_text(&sample("Faisal", 2980.4), "SAR").to_lowercase();
        assert!(text.contains("faisal"));
        assert!(text.contains("sar 2,980.40"));
        assert!(text.contains("24/03/2024"));
    }

    #[test]
    fn sorts_numbers_and_dates() {
        let mut rows = vec![sample("B", 300.0), sample("A", 100.0), sample("C", 200.0)];
        sort_list(&mut rows, "Total_Salary", true);
        let names: Vec<&str> = rows.iter().map(|r| r.display_name()).collect();
        assert_eq!(names, ["A", "C", "B"]);

        rows[0].joining_date = Some("2020-01-01".into());
        sort_list(&mut rows, "joining_Date", false);
        assert_eq!(rows[2].display_name(), "A");
    }
}
