//! Courier directory logic, independent of the DOM.

use super::api::CourierApi;
use super::state::{CourierDirectoryState, PanelState};
use crate::shared::error::AppError;
use contracts::domain::a030_courier::{CourierFilterRequest, CourierRecord, Scorecard};
use futures::future::join_all;
use std::cell::RefCell;

/// What the directory page must be able to redraw
pub trait CourierView {
    fn render_scorecard(&self, scorecard: Scorecard, state: &CourierDirectoryState);

    /// Table, pager and inline message
    fn render_list(&self, state: &CourierDirectoryState);

    fn render_panel(&self, panel: &PanelState);
}

pub struct CourierController<A: CourierApi, V: CourierView> {
    api: A,
    view: V,
    state: RefCell<CourierDirectoryState>,
}

impl<A: CourierApi, V: CourierView> CourierController<A, V> {
    pub fn new(api: A, view: V, page_size: usize) -> Self {
        Self {
            api,
            view,
            state: RefCell::new(CourierDirectoryState::new(page_size)),
        }
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&CourierDirectoryState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Fire all count requests at once. Each answer updates only its tile.
    pub async fn load_scorecards(&self) {
        let requests = Scorecard::all().into_iter().map(|scorecard| async move {
            let result = self.api.count(scorecard).await;
            self.apply_count(scorecard, result);
        });
        join_all(requests).await;
    }

    fn apply_count(&self, scorecard: Scorecard, result: Result<u64, AppError>) {
        let count = match result {
            Ok(count) => Some(count),
            Err(e) => {
                log::error!("Error fetching {}: {}", scorecard.endpoint(), e);
                None
            }
        };
        let mut state = self.state.borrow_mut();
        state.set_count(scorecard, count);
        self.view.render_scorecard(scorecard, &state);
    }

    pub async fn load_all(&self) -> Result<usize, AppError> {
        let result = self.api.all().await;
        let mut state = self.state.borrow_mut();
        let outcome = match result {
            Ok(couriers) => {
                let count = couriers.len();
                state.replace_all(couriers);
                Ok(count)
            }
            Err(e) => {
                log::error!("Error fetching courier list: {}", e);
                state.fail_list();
                Err(e)
            }
        };
        self.view.render_list(&state);
        outcome
    }

    /// Server-side filter. A single match opens its detail panel.
    pub async fn filter(&self, request: &CourierFilterRequest) -> Result<usize, AppError> {
        let result = self.api.filter(request).await;

        let (count, single) = {
            let mut state = self.state.borrow_mut();
            let outcome = match result {
                Ok(couriers) => {
                    let single = match couriers.as_slice() {
                        [only] => only.barq_id(),
                        _ => None,
                    };
                    let count = couriers.len();
                    state.replace_filtered(couriers);
                    Ok((count, single))
                }
                Err(e) => {
                    log::error!("Error filtering couriers: {}", e);
                    state.fail_list();
                    Err(e)
                }
            };
            self.view.render_list(&state);
            outcome?
        };

        if let Some(barq_id) = single {
            // A failed detail fetch is logged and does not fail the filter
            let _ = self.select(&barq_id).await;
        }
        Ok(count)
    }

    /// Fetch one courier and show it in the panel. Failures leave the panel as it was.
    pub async fn select(&self, barq_id: &str) -> Result<(), AppError> {
        match self.api.details(barq_id).await {
            Ok(record) => {
                self.open(record);
                Ok(())
            }
            Err(e) => {
                log::error!("Error fetching courier {} details: {}", barq_id, e);
                Err(e)
            }
        }
    }

    fn open(&self, record: CourierRecord) {
        let mut state = self.state.borrow_mut();
        state.panel = PanelState::Open(record);
        self.view.render_panel(&state.panel);
    }

    pub fn close(&self) {
        let mut state = self.state.borrow_mut();
        if state.panel.is_open() {
            state.panel = PanelState::Closed;
            self.view.render_panel(&state.panel);
        }
    }

    pub fn next_page(&self) -> bool {
        self.paginate(|state| state.pagination.next_page())
    }

    pub fn previous_page(&self) -> bool {
        self.paginate(|state| state.pagination.previous_page())
    }

    /// No refetch; the current list is re-sliced from page 1
    pub fn set_page_size(&self, page_size: usize) {
        self.paginate(|state| {
            state.pagination.set_page_size(page_size);
            true
        });
    }

    fn paginate(&self, f: impl FnOnce(&mut CourierDirectoryState) -> bool) -> bool {
        let mut state = self.state.borrow_mut();
        let moved = f(&mut state);
        if moved {
            self.view.render_list(&state);
        }
        moved
    }
}
