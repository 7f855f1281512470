//! Per-employee salary slip, printed as one A4 page.

use crate::shared::date_utils::format_date_opt;
use crate::shared::error::AppError;
use crate::shared::number_format::{format_currency_opt, format_plain};
use crate::shared::print::{escape_html, html_page};
use contracts::dashboards::d500_salary::SalaryRecord;

pub const COMPANY_NAME: &str = "Barq Delivery Services";
pub const COMPANY_CITY: &str = "Riyadh, Saudi Arabia";
pub const TITLE: &str = "Salary Slip";
pub const FOOTER_LINES: [&str; 2] = [
    "This is a computer-generated document. No signature is required.",
    "Generated by Barq Salary Calculator System",
];

const PRINT_CSS: &str = "@page { size: A4; margin: 18mm; } \
body { font-family: system-ui, 'Segoe UI', Tahoma, Arial, sans-serif; color: #333; font-size: 12px; } \
header { text-align: center; margin-bottom: 16px; } \
header h1 { font-size: 20px; margin: 0; } \
header p { margin: 4px 0 18px; } \
h3 { font-size: 14px; margin: 14px 0 6px; } \
table { width: 100%; border-collapse: collapse; } \
th, td { border-bottom: 1px solid #ddd; padding: 6px 8px; text-align: start; } \
th { width: 180px; background: #f5f5f5; } \
tr.total th, tr.total td { background: #eaf7ea; font-weight: bold; } \
footer { margin-top: 28px; border-top: 1px solid #ddd; text-align: center; color: #777; font-size: 10px; } \
@media print { body { -webkit-print-color-adjust: exact; print-color-adjust: exact; } }";

#[derive(Debug, Clone, PartialEq)]
pub struct PayslipRow {
    pub label: &'static str,
    pub value: String,
    pub emphasised: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayslipSection {
    /// The identity block has no heading
    pub title: Option<&'static str>,
    pub rows: Vec<PayslipRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payslip {
    pub barq_id: String,
    pub period_start: String,
    pub sections: Vec<PayslipSection>,
}

fn row(label: &'static str, value: String) -> PayslipRow {
    PayslipRow {
        label,
        value,
        emphasised: false,
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl Payslip {
    /// Requires the record's pay period; everything else may be blank
    pub fn from_record(record: &SalaryRecord, currency: &str) -> Result<Self, AppError> {
        let period_start = record.period_start().ok_or(AppError::MissingPeriod)?;
        let money = |v: Option<f64>| format_currency_opt(v, currency);

        let identity = PayslipSection {
            title: None,
            rows: vec![
                row("BARQ ID", text(&record.barq_id)),
                row("Name", text(&record.name)),
                row("IBAN", text(&record.iban)),
                row("ID Number", text(&record.id_number)),
                row("Joining Date", format_date_opt(record.joining_date.as_deref())),
                row("Status", text(&record.status)),
                row("Sponsorship Status", text(&record.sponsorship_status)),
            ],
        };
        let performance = PayslipSection {
            title: Some("Performance Metrics"),
            rows: vec![
                row("Total Orders", format_plain(record.total_orders)),
                row("Target", format_plain(record.target())),
                row("Total Revenue", money(record.total_revenue)),
                row("Gas Usage", money(record.gas_usage)),
            ],
        };
        let breakdown = PayslipSection {
            title: Some("Salary Breakdown"),
            rows: vec![
                row("Basic Salary", money(record.basic_salary)),
                row("Bonus Amount", money(record.bonus_amount)),
                row("Gas Deserved", money(record.gas_deserved)),
                row("Gas Difference", money(record.gas_difference)),
                PayslipRow {
                    label: "Total Salary",
                    value: money(record.total_salary),
                    emphasised: true,
                },
            ],
        };
        let period = PayslipSection {
            title: Some("Period"),
            rows: vec![
                row("Start Date", format_date_opt(Some(period_start))),
                row("End Date", format_date_opt(record.period_end())),
            ],
        };

        Ok(Self {
            barq_id: record.barq_id.clone().unwrap_or_else(|| "unknown".to_string()),
            period_start: period_start.to_string(),
            sections: vec![identity, performance, breakdown, period],
        })
    }

    /// Print title; browsers use it as the default PDF file name
    pub fn document_title(&self) -> String {
        format!("payslip_{}_{}", self.barq_id, self.period_start)
    }

    /// `payslip_<BARQ_ID>_<period start>.pdf`
    pub fn filename(&self) -> String {
        format!("{}.pdf", self.document_title())
    }

    /// Printable A4 page
    pub fn to_html(&self) -> String {
        let mut body = String::new();
        body.push_str(&format!(
            "<header><h1>{}</h1><p>{}</p><h2>{}</h2></header>",
            escape_html(COMPANY_NAME),
            escape_html(COMPANY_CITY),
            escape_html(TITLE)
        ));

        for section in &self.sections {
            body.push_str("<section>");
            if let Some(title) = section.title {
                body.push_str(&format!("<h3>{}</h3>", escape_html(title)));
            }
            body.push_str("<table>");
            for r in &section.rows {
                let class = if r.emphasised { " class=\"total\"" } else { "" };
                body.push_str(&format!(
                    "<tr{}><th>{}</th><td dir=\"auto\">{}</td></tr>",
                    class,
                    escape_html(r.label),
                    escape_html(&r.value)
                ));
            }
            body.push_str("</table></section>");
        }

        body.push_str("<footer>");
        for line in FOOTER_LINES {
            body.push_str(&format!("<p>{}</p>", escape_html(line)));
        }
        body.push_str("</footer>");

        html_page(&self.document_title(), PRINT_CSS, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d500_salary::fixtures::record;

    #[test]
    fn missing_period_is_reported() {
        let mut r = record("Faisal", 100.0);
        r.period = None;
        assert_eq!(Payslip::from_record(&r, "SAR"), Err(AppError::MissingPeriod));
    }

    #[test]
    fn blocks_and_filename() {
        let mut r = record("Faisal", 2980.4);
        r.barq_id = Some("10234".into());
        let slip = Payslip::from_record(&r, "SAR").unwrap();

        assert_eq!(slip.filename(), "payslip_10234_2024-02-25.pdf");
        let titles: Vec<Option<&str>> = slip.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [None, Some("Performance Metrics"), Some("Salary Breakdown"), Some("Period")]
        );
        assert_eq!(slip.sections[0].rows.len(), 7);

        let total = slip.sections[2].rows.last().unwrap();
        assert_eq!(total.label, "Total Salary");
        assert_eq!(total.value, "SAR 2,980.40");
        assert!(total.emphasised);
        assert_eq!(slip.sections[3].rows[0].value, "25/02/2024");
    }

    #[test]
    fn renders_printable_html_with_header_and_footer() {
        let slip = Payslip::from_record(&record("Faisal <Abu Omar>", 2980.4), "SAR").unwrap();
        let html = slip.to_html();
        assert!(html.contains("<title>payslip_B-1_2024-02-25</title>"));
        assert!(html.contains(COMPANY_NAME));
        assert!(html.contains("<h2>Salary Slip</h2>"));
        assert!(html.contains("Faisal &lt;Abu Omar&gt;"));
        assert!(html.contains("<tr class=\"total\"><th>Total Salary</th><td dir=\"auto\">SAR 2,980.40</td></tr>"));
        assert!(html.contains(FOOTER_LINES[1]));
    }

    #[test]
    fn arabic_name_survives() {
        let slip = Payslip::from_record(&record("محمد العتيبي", 4200.0), "SAR").unwrap();
        let html = slip.to_html();
        assert!(html.contains("<td dir=\"auto\">محمد العتيبي</td>"));
        assert!(!html.contains('?'));
    }
}
