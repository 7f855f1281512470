mod dashboard;
mod details_modal;
mod params_form;

pub use dashboard::SalaryDashboard;
