pub mod api;
pub mod charts;
pub mod columns;
pub mod controller;
pub mod csv;
pub mod form;
pub mod payslip;
pub mod state;
pub mod ui;

#[cfg(test)]
pub(crate) mod fixtures {
    use contracts::dashboards::d500_salary::{SalaryPeriod, SalaryRecord};

    /// A row with a period, joining date and 412 orders
    pub fn record(name: &str, salary: f64) -> SalaryRecord {
        SalaryRecord {
            barq_id: Some("B-1".into()),
            name: Some(name.into()),
            joining_date: Some("2023-02-11".into()),
            total_orders: Some(412.0),
            total_salary: Some(salary),
            period: Some(SalaryPeriod {
                start_date: Some("2024-02-25".into()),
                end_date: Some("2024-03-24".into()),
            }),
            ..Default::default()
        }
    }
}
