use crate::shared::components::bar_chart::BarChart;
use contracts::dashboards::d500_salary::SalaryRecord;

pub const SALARY_COLOR: &str = "rgba(76, 175, 80, 0.6)";
pub const BONUS_COLOR: &str = "rgba(0, 188, 212, 0.6)";

/// The two distribution charts of the dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSet {
    pub salary: Option<BarChart>,
    pub bonus: Option<BarChart>,
    /// Bumped on every rebuild; the view keys chart widgets on it
    pub generation: u64,
}

impl ChartSet {
    /// Drop the current charts and build new ones from `records`
    pub fn rebuild(&mut self, records: &[SalaryRecord]) {
        if self.salary.take().is_some() | self.bonus.take().is_some() {
            log::debug!("Dropping charts of generation {}", self.generation);
        }

        let names: Vec<String> = records.iter().map(|r| r.display_name().to_string()).collect();
        let series = |value: fn(&SalaryRecord) -> Option<f64>| -> Vec<(String, f64)> {
            names
                .iter()
                .cloned()
                .zip(records.iter().map(|r| value(r).unwrap_or(0.0)))
                .collect()
        };

        self.salary = Some(
            BarChart::new("Salary Distribution", "Total Salary", SALARY_COLOR)
                .with_bars(series(|r| r.total_salary)),
        );
        self.bonus = Some(
            BarChart::new("Bonus Distribution", "Bonus Amount", BONUS_COLOR)
                .with_bars(series(|r| r.bonus_amount)),
        );
        self.generation += 1;
    }

    pub fn is_built(&self) -> bool {
        self.salary.is_some() && self.bonus.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d500_salary::fixtures::record;

    #[test]
    fn rebuild_replaces_previous_charts() {
        let mut charts = ChartSet::default();
        assert!(!charts.is_built());

        charts.rebuild(&[record("A", 100.0), record("B", 200.0)]);
        assert_eq!(charts.generation, 1);
        assert_eq!(charts.salary.as_ref().unwrap().bars.len(), 2);

        let mut unnamed = record("", 50.0);
        unnamed.bonus_amount = Some(5.0);
        charts.rebuild(&[unnamed]);
        assert_eq!(charts.generation, 2);

        let salary = charts.salary.as_ref().unwrap();
        assert_eq!(salary.bars, vec![("Unknown".to_string(), 50.0)]);
        let bonus = charts.bonus.as_ref().unwrap();
        assert_eq!(bonus.bars, vec![("Unknown".to_string(), 5.0)]);
    }

    #[test]
    fn missing_values_plot_as_zero() {
        let mut row = record("A", 0.0);
        row.total_salary = None;
        let mut charts = ChartSet::default();
        charts.rebuild(&[row]);
        assert_eq!(charts.salary.unwrap().bars[0].1, 0.0);
    }
}
