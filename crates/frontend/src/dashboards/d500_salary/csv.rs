use super::columns::{cell_value, CellFormat, CellValue, COLUMNS};
use crate::shared::date_utils::{format_date_opt, today_stamp};
use crate::shared::export::CsvExportable;
use crate::shared::number_format::format_plain;
use contracts::dashboards::d500_salary::SalaryRecord;

/// Free-text columns that are always quoted: Name and Supervisor
const QUOTED: &[usize] = &[1, 8];

impl CsvExportable for SalaryRecord {
    fn headers() -> Vec<&'static str> {
        COLUMNS.iter().map(|c| c.header).collect()
    }

    /// Numbers are written raw (no currency), dates as DD/MM/YYYY
    fn to_csv_row(&self) -> Vec<String> {
        COLUMNS
            .iter()
            .map(|column| match (cell_value(self, column.key), column.format) {
                (CellValue::Number(v), _) => format_plain(v),
                (CellValue::Text(v), CellFormat::Date) => format_date_opt(v),
                (CellValue::Text(v), _) => v.unwrap_or_default().to_string(),
            })
            .collect()
    }

    fn always_quoted() -> &'static [usize] {
        QUOTED
    }
}

pub fn csv_filename() -> String {
    format!("salary_data_{}.csv", today_stamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d500_salary::fixtures::record;
    use crate::shared::export::build_csv;

    #[test]
    fn quoted_columns_are_name_and_supervisor() {
        let headers = SalaryRecord::headers();
        assert_eq!(headers[QUOTED[0]], "Name");
        assert_eq!(headers[QUOTED[1]], "Supervisor");
    }

    #[test]
    fn two_records_make_three_lines() {
        let mut first = record("Faisal \"Abu Omar\" Al-Harbi", 2980.4);
        first.supervisor = Some("Omar".into());
        first.project = Some("Food, Riyadh".into());
        let second = record("Sara", 1500.0);

        let csv = build_csv(&[first, second]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);

        assert_eq!(
            lines[0],
            "BARQ ID,Name,IBAN,ID Number,Joining Date,Status,Sponsorship Status,Project,\
             Supervisor,Total Orders,Total Revenue,Gas Usage,Basic Salary,Bonus Amount,\
             Gas Deserved,Gas Difference,Total Salary,Start Period,End Period,Target,\
             Days Since Joining"
        );
        assert_eq!(
            lines[1],
            "B-1,\"Faisal \"\"Abu Omar\"\" Al-Harbi\",,,11/02/2023,,,\"Food, Riyadh\",\"Omar\",\
             412,,,,,,,2980.4,25/02/2024,24/03/2024,,"
        );
        assert!(lines[2].starts_with("B-1,\"Sara\",,,11/02/2023"));
        assert!(lines[2].contains(",\"\",412,"));
    }

    #[test]
    fn filename_carries_today() {
        let name = csv_filename();
        assert!(name.starts_with("salary_data_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "salary_data_2024-01-01.csv".len());
    }
}
