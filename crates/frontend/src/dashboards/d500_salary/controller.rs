//! Salary page logic, independent of the DOM.
//!
//! The controller owns [`SalaryDashboardState`] and talks to the page only
//! through [`SalaryView`], so every flow can be driven by fakes in tests.

use super::api::SalaryApi;
use super::csv::csv_filename;
use super::form::SalaryForm;
use super::payslip::Payslip;
use super::state::SalaryDashboardState;
use crate::shared::error::AppError;
use crate::shared::export::{build_csv, csv_bytes_with_bom, CSV_MIME};
use crate::shared::toast::{Notifier, ToastKind};
use contracts::dashboards::d500_salary::SalaryRecord;
use std::cell::RefCell;

pub const MSG_CALCULATED: &str = "Salaries calculated successfully.";
pub const MSG_NO_RESULTS: &str = "No salary data found for the selected criteria.";
pub const MSG_FETCH_FAILED: &str = "Error fetching salary data.";
pub const MSG_NO_CSV_DATA: &str = "No data available to download";
pub const MSG_CSV_DONE: &str = "CSV downloaded successfully";
pub const MSG_CSV_FAILED: &str = "Error downloading CSV";
pub const MSG_NO_PERIOD: &str = "Period information missing, cannot generate payslip.";
pub const MSG_PAYSLIP_DONE: &str = "Payslip generated successfully.";
pub const MSG_PAYSLIP_FAILED: &str = "Error generating payslip";

/// What the salary page must be able to do for the controller
pub trait SalaryView: Notifier {
    /// Disable the submit control and show the spinner (or undo both)
    fn set_busy(&self, busy: bool);

    /// Redraw table, tiles and charts from the current state
    fn render_results(&self, state: &SalaryDashboardState);

    /// Offer bytes to the user as a file
    fn download(&self, bytes: &[u8], mime: &str, filename: &str) -> Result<(), AppError>;

    /// Open an HTML document in the browser's print dialog
    fn print(&self, html: &str) -> Result<(), AppError>;
}

pub struct SalaryController<A: SalaryApi, V: SalaryView> {
    api: A,
    view: V,
    currency: String,
    state: RefCell<SalaryDashboardState>,
}

impl<A: SalaryApi, V: SalaryView> SalaryController<A, V> {
    pub fn new(api: A, view: V, currency: impl Into<String>) -> Self {
        Self {
            api,
            view,
            currency: currency.into(),
            state: RefCell::new(SalaryDashboardState::default()),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&SalaryDashboardState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Validate, request and render. Returns the number of rows received.
    pub async fn submit(&self, form: &SalaryForm) -> Result<usize, AppError> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.view.notify(ToastKind::Warning, &e.user_message(""));
                return Err(e);
            }
        };

        self.view.set_busy(true);
        log::debug!("Calculating salaries for {}", request.category);
        let result = self.api.calculate(&request).await;

        let outcome = match result {
            Ok(records) if records.is_empty() => {
                self.view.notify(ToastKind::Warning, MSG_NO_RESULTS);
                Err(AppError::EmptyResult)
            }
            Ok(records) => {
                let count = records.len();
                {
                    let mut state = self.state.borrow_mut();
                    state.replace_records(records, &self.currency);
                    self.view.render_results(&state);
                }
                self.view.notify(ToastKind::Success, MSG_CALCULATED);
                Ok(count)
            }
            Err(e) => {
                log::error!("Salary calculation failed: {}", e);
                self.view.notify(ToastKind::Danger, &e.user_message(MSG_FETCH_FAILED));
                Err(e)
            }
        };

        self.view.set_busy(false);
        outcome
    }

    /// Apply a settled search term
    pub fn search(&self, term: &str) -> usize {
        let mut state = self.state.borrow_mut();
        state.set_search(term);
        self.view.render_results(&state);
        state.visible().len()
    }

    pub fn toggle_sort(&self, field: &str) {
        let mut state = self.state.borrow_mut();
        state.toggle_sort(field, &self.currency);
        self.view.render_results(&state);
    }

    /// Download every row (not just the visible ones) as CSV
    pub fn export_csv(&self) -> Result<(), AppError> {
        let state = self.state.borrow();
        if !state.has_data() {
            self.view.notify(ToastKind::Warning, MSG_NO_CSV_DATA);
            return Err(AppError::EmptyResult);
        }

        let bytes = csv_bytes_with_bom(&build_csv(&state.records));
        match self.view.download(&bytes, CSV_MIME, &csv_filename()) {
            Ok(()) => {
                self.view.notify(ToastKind::Success, MSG_CSV_DONE);
                Ok(())
            }
            Err(e) => {
                log::error!("CSV download error: {}", e);
                self.view.notify(ToastKind::Danger, MSG_CSV_FAILED);
                Err(e)
            }
        }
    }

    /// Render the slip of one row and send it to print. Returns the PDF
    /// file name the print dialog offers.
    pub fn generate_payslip(&self, record: &SalaryRecord) -> Result<String, AppError> {
        let result = Payslip::from_record(record, &self.currency).and_then(|slip| {
            self.view.print(&slip.to_html())?;
            Ok(slip.filename())
        });

        match &result {
            Ok(_) => self.view.notify(ToastKind::Success, MSG_PAYSLIP_DONE),
            Err(AppError::MissingPeriod) => self.view.notify(ToastKind::Danger, MSG_NO_PERIOD),
            Err(e) => {
                log::error!("Payslip generation error: {}", e);
                self.view.notify(ToastKind::Danger, MSG_PAYSLIP_FAILED);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d500_salary::fixtures::record;
    use crate::dashboards::d500_salary::form::{MSG_NO_CATEGORY, MSG_NO_PERIOD as MSG_FORM_PERIOD};
    use async_trait::async_trait;
    use contracts::dashboards::d500_salary::{CalculateSalaryRequest, Category};
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeApi {
        calls: Cell<usize>,
        reply: RefCell<Result<Vec<SalaryRecord>, AppError>>,
    }

    impl FakeApi {
        fn replying(reply: Result<Vec<SalaryRecord>, AppError>) -> Self {
            Self {
                calls: Cell::new(0),
                reply: RefCell::new(reply),
            }
        }
    }

    #[async_trait(?Send)]
    impl SalaryApi for FakeApi {
        async fn calculate(&self, _request: &CalculateSalaryRequest) -> Result<Vec<SalaryRecord>, AppError> {
            self.calls.set(self.calls.get() + 1);
            self.reply.borrow().clone()
        }
    }

    #[derive(Default)]
    struct FakeView {
        toasts: RefCell<Vec<(ToastKind, String)>>,
        busy: RefCell<Vec<bool>>,
        rendered_rows: Cell<Option<usize>>,
        downloads: RefCell<Vec<(String, String, usize)>>,
        fail_downloads: Cell<bool>,
        printed: RefCell<Vec<String>>,
    }

    impl FakeView {
        fn last_toast(&self) -> (ToastKind, String) {
            self.toasts.borrow().last().cloned().unwrap()
        }
    }

    impl Notifier for FakeView {
        fn notify(&self, kind: ToastKind, message: &str) {
            self.toasts.borrow_mut().push((kind, message.to_string()));
        }
    }

    impl SalaryView for FakeView {
        fn set_busy(&self, busy: bool) {
            self.busy.borrow_mut().push(busy);
        }

        fn render_results(&self, state: &SalaryDashboardState) {
            self.rendered_rows.set(Some(state.visible().len()));
        }

        fn download(&self, bytes: &[u8], mime: &str, filename: &str) -> Result<(), AppError> {
            if self.fail_downloads.get() {
                return Err(AppError::Download("blocked".into()));
            }
            self.downloads
                .borrow_mut()
                .push((filename.to_string(), mime.to_string(), bytes.len()));
            Ok(())
        }

        fn print(&self, html: &str) -> Result<(), AppError> {
            if self.fail_downloads.get() {
                return Err(AppError::Render("popup blocked".into()));
            }
            self.printed.borrow_mut().push(html.to_string());
            Ok(())
        }
    }

    fn valid_form() -> SalaryForm {
        SalaryForm {
            category: Some(Category::Motorcycle),
            month: "3".into(),
            year: "2024".into(),
            ..Default::default()
        }
    }

    fn controller(reply: Result<Vec<SalaryRecord>, AppError>) -> SalaryController<FakeApi, FakeView> {
        SalaryController::new(FakeApi::replying(reply), FakeView::default(), "SAR")
    }

    #[test]
    fn no_category_sends_nothing() {
        let ctrl = controller(Ok(vec![record("A", 1.0)]));
        let form = SalaryForm {
            category: None,
            ..valid_form()
        };

        let result = block_on(ctrl.submit(&form));
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(ctrl.api.calls.get(), 0);
        assert!(ctrl.view.busy.borrow().is_empty());
        assert_eq!(ctrl.view.last_toast(), (ToastKind::Warning, MSG_NO_CATEGORY.to_string()));
    }

    #[test]
    fn missing_month_sends_nothing() {
        let ctrl = controller(Ok(vec![record("A", 1.0)]));
        let form = SalaryForm {
            month: String::new(),
            ..valid_form()
        };
        assert!(block_on(ctrl.submit(&form)).is_err());
        assert_eq!(ctrl.api.calls.get(), 0);
        assert_eq!(ctrl.view.last_toast().1, MSG_FORM_PERIOD);
    }

    #[test]
    fn n_records_render_n_rows_with_totals() {
        let mut a = record("A", 1200.0);
        a.bonus_amount = Some(100.0);
        let mut b = record("B", 800.5);
        b.bonus_amount = None;
        b.total_orders = None;
        let c = record("C", 99.5);

        let ctrl = controller(Ok(vec![a, b, c]));
        assert_eq!(block_on(ctrl.submit(&valid_form())), Ok(3));

        assert_eq!(ctrl.view.rendered_rows.get(), Some(3));
        assert_eq!(*ctrl.view.busy.borrow(), vec![true, false]);
        assert_eq!(ctrl.view.last_toast(), (ToastKind::Success, MSG_CALCULATED.to_string()));

        ctrl.with_state(|s| {
            assert_eq!(s.summary.employee_count, 3);
            assert_eq!(s.summary.total_salary, 2100.0);
            assert_eq!(s.summary.total_bonus, 100.0);
            assert_eq!(s.summary.total_orders, 824);
            assert!(s.charts.is_built());
        });
    }

    #[test]
    fn empty_result_keeps_previous_rows() {
        let ctrl = controller(Ok(vec![record("A", 1.0)]));
        block_on(ctrl.submit(&valid_form())).unwrap();

        *ctrl.api.reply.borrow_mut() = Ok(Vec::new());
        let result = block_on(ctrl.submit(&valid_form()));
        assert_eq!(result, Err(AppError::EmptyResult));
        assert_eq!(ctrl.view.last_toast(), (ToastKind::Warning, MSG_NO_RESULTS.to_string()));
        assert_eq!(ctrl.with_state(|s| s.records.len()), 1);
        assert_eq!(*ctrl.view.busy.borrow(), vec![true, false, true, false]);
    }

    #[test]
    fn server_error_text_is_preferred() {
        let ctrl = controller(Err(AppError::Http {
            status: 400,
            message: Some("Missing required fields".into()),
        }));
        assert!(block_on(ctrl.submit(&valid_form())).is_err());
        assert_eq!(
            ctrl.view.last_toast(),
            (ToastKind::Danger, "Missing required fields".to_string())
        );
        assert_eq!(*ctrl.view.busy.borrow(), vec![true, false]);

        let ctrl = controller(Err(AppError::Network("offline".into())));
        assert!(block_on(ctrl.submit(&valid_form())).is_err());
        assert_eq!(ctrl.view.last_toast().1, MSG_FETCH_FAILED);
    }

    #[test]
    fn search_narrows_rendered_rows() {
        let ctrl = controller(Ok(vec![record("Faisal", 1.0), record("Omar", 2.0)]));
        block_on(ctrl.submit(&valid_form())).unwrap();
        assert_eq!(ctrl.search("fai"), 1);
        assert_eq!(ctrl.view.rendered_rows.get(), Some(1));
        assert_eq!(ctrl.search(""), 2);
    }

    #[test]
    fn csv_export_is_guarded() {
        let ctrl = controller(Ok(vec![record("A", 1.0), record("B", 2.0)]));
        assert_eq!(ctrl.export_csv(), Err(AppError::EmptyResult));
        assert_eq!(ctrl.view.last_toast(), (ToastKind::Warning, MSG_NO_CSV_DATA.to_string()));

        block_on(ctrl.submit(&valid_form())).unwrap();
        ctrl.export_csv().unwrap();
        let downloads = ctrl.view.downloads.borrow();
        assert_eq!(downloads.len(), 1);
        assert!(downloads[0].0.starts_with("salary_data_"));
        assert_eq!(downloads[0].1, CSV_MIME);
        drop(downloads);
        assert_eq!(ctrl.view.last_toast().1, MSG_CSV_DONE);

        ctrl.view.fail_downloads.set(true);
        assert!(ctrl.export_csv().is_err());
        assert_eq!(ctrl.view.last_toast(), (ToastKind::Danger, MSG_CSV_FAILED.to_string()));
    }

    #[test]
    fn payslip_outcomes() {
        let ctrl = controller(Ok(Vec::new()));

        let mut no_period = record("A", 1.0);
        no_period.period = None;
        assert_eq!(ctrl.generate_payslip(&no_period), Err(AppError::MissingPeriod));
        assert_eq!(ctrl.view.last_toast(), (ToastKind::Danger, MSG_NO_PERIOD.to_string()));
        assert!(ctrl.view.printed.borrow().is_empty());

        let filename = ctrl.generate_payslip(&record("محمد العتيبي", 1.0)).unwrap();
        assert_eq!(filename, "payslip_B-1_2024-02-25.pdf");
        assert!(ctrl.view.printed.borrow()[0].contains("محمد العتيبي"));
        assert!(ctrl.view.downloads.borrow().is_empty());
        assert_eq!(ctrl.view.last_toast(), (ToastKind::Success, MSG_PAYSLIP_DONE.to_string()));

        ctrl.view.fail_downloads.set(true);
        assert!(ctrl.generate_payslip(&record("A", 1.0)).is_err());
        assert_eq!(ctrl.view.last_toast().1, MSG_PAYSLIP_FAILED);
    }
}
