use super::charts::ChartSet;
use super::columns::row_text;
use crate::shared::list_utils::{matches_term, sort_list, SortState};
use contracts::dashboards::d500_salary::SalaryRecord;

/// KPI tiles above the table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub employee_count: usize,
    pub total_salary: f64,
    pub total_bonus: f64,
    pub total_orders: u64,
}

impl DashboardSummary {
    /// Totals over all rows; missing or non-numeric values count as zero
    pub fn from_records(records: &[SalaryRecord]) -> Self {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite()).unwrap_or(0.0);
        Self {
            employee_count: records.len(),
            total_salary: records.iter().map(|r| finite(r.total_salary)).sum(),
            total_bonus: records.iter().map(|r| finite(r.bonus_amount)).sum(),
            total_orders: records
                .iter()
                .map(|r| finite(r.total_orders).trunc().max(0.0) as u64)
                .sum(),
        }
    }
}

/// Everything the salary page shows after a successful calculation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryDashboardState {
    pub records: Vec<SalaryRecord>,
    pub summary: DashboardSummary,
    pub charts: ChartSet,
    pub sort: SortState,
    pub search: String,
    /// Lower-cased row text, parallel to `records`
    search_index: Vec<String>,
}

impl SalaryDashboardState {
    /// Swap in a fresh result set. Sort and search are kept.
    pub fn replace_records(&mut self, records: Vec<SalaryRecord>, currency: &str) {
        self.records = records;
        if let Some(field) = self.sort.field.clone() {
            sort_list(&mut self.records, &field, self.sort.ascending);
        }
        self.summary = DashboardSummary::from_records(&self.records);
        self.charts.rebuild(&self.records);
        self.reindex(currency);
    }

    pub fn has_data(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn toggle_sort(&mut self, field: &str, currency: &str) {
        self.sort.toggle(field);
        sort_list(&mut self.records, field, self.sort.ascending);
        self.reindex(currency);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Rows matching the current search term, in table order
    pub fn visible(&self) -> Vec<&SalaryRecord> {
        self.records
            .iter()
            .zip(&self.search_index)
            .filter(|(_, text)| matches_term(text, &self.search))
            .map(|(record, _)| record)
            .collect()
    }

    fn reindex(&mut self, currency: &str) {
        self.search_index = self
            .records
            .iter()
            .map(|r| row_text(r, currency).to_lowercase())
            .collect();
    }
}
