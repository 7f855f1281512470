//! Page-local state of the courier directory.

use crate::shared::components::stat_card::StatValue;
use crate::shared::number_format::format_number_int;
use crate::shared::pagination::Pagination;
use contracts::domain::a030_courier::{CourierRecord, Scorecard};
use std::collections::BTreeMap;

pub const MSG_FETCH_FAILED: &str = "Failed to retrieve data. Please try again later.";
pub const MSG_NO_MATCHES: &str = "No data found for the selected courier or filters.";

/// Side panel visibility. Opening while open replaces the content.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PanelState {
    #[default]
    Closed,
    Open(CourierRecord),
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        matches!(self, PanelState::Open(_))
    }

    pub fn record(&self) -> Option<&CourierRecord> {
        match self {
            PanelState::Open(record) => Some(record),
            PanelState::Closed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourierDirectoryState {
    pub couriers: Vec<CourierRecord>,
    pub pagination: Pagination,
    /// Inline message shown instead of the table
    pub list_message: Option<String>,
    pub panel: PanelState,
    pub scorecards: BTreeMap<Scorecard, StatValue>,
}

impl CourierDirectoryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            couriers: Vec::new(),
            pagination: Pagination::new(page_size),
            list_message: None,
            panel: PanelState::Closed,
            scorecards: Scorecard::all()
                .into_iter()
                .map(|s| (s, StatValue::Loading))
                .collect(),
        }
    }

    /// Full list loaded: back to page 1
    pub fn replace_all(&mut self, couriers: Vec<CourierRecord>) {
        self.pagination.reset(couriers.len());
        self.list_message = None;
        self.couriers = couriers;
    }

    /// Filter result: keep the page when it still exists
    pub fn replace_filtered(&mut self, couriers: Vec<CourierRecord>) {
        self.pagination.set_total(couriers.len());
        self.list_message = if couriers.is_empty() {
            Some(MSG_NO_MATCHES.to_string())
        } else {
            None
        };
        self.couriers = couriers;
    }

    pub fn fail_list(&mut self) {
        self.couriers.clear();
        self.pagination.reset(0);
        self.list_message = Some(MSG_FETCH_FAILED.to_string());
    }

    pub fn set_count(&mut self, scorecard: Scorecard, count: Option<u64>) {
        let value = match count {
            Some(n) => StatValue::Ready(format_number_int(n as f64)),
            None => StatValue::Failed,
        };
        self.scorecards.insert(scorecard, value);
    }

    pub fn scorecard(&self, scorecard: Scorecard) -> StatValue {
        self.scorecards
            .get(&scorecard)
            .cloned()
            .unwrap_or(StatValue::Loading)
    }

    /// Rows of the current page
    pub fn page_rows(&self) -> &[CourierRecord] {
        self.pagination.slice(&self.couriers)
    }
}

impl Default for CourierDirectoryState {
    fn default() -> Self {
        Self::new(Pagination::default().page_size())
    }
}
