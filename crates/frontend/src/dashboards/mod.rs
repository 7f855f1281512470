pub mod d500_salary;

pub use d500_salary::ui::SalaryDashboard;
