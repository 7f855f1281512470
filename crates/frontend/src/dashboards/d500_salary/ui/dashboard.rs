use super::details_modal::SalaryDetailsModal;
use super::params_form::ParamsForm;
use crate::dashboards::d500_salary::api::HttpSalaryApi;
use crate::dashboards::d500_salary::charts::ChartSet;
use crate::dashboards::d500_salary::columns::{cell_text, ACTIONS_HEADER, COLUMNS};
use crate::dashboards::d500_salary::controller::{SalaryController, SalaryView};
use crate::dashboards::d500_salary::form::SalaryForm;
use crate::dashboards::d500_salary::state::{DashboardSummary, SalaryDashboardState};
use crate::shared::components::bar_chart::{BarChart, BarChartView};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::{StatCard, StatValue};
use crate::shared::config::ClientConfig;
use crate::shared::error::AppError;
use crate::shared::export::download_bytes;
use crate::shared::print::open_print_window;
use crate::shared::icons::icon;
use crate::shared::list_utils::SortState;
use crate::shared::number_format::{format_currency, format_number_int};
use crate::shared::toast::{Notifier, ToastKind, ToastService};
use chrono::{Datelike, Utc};
use contracts::dashboards::d500_salary::{Category, SalaryRecord};
use leptos::prelude::*;
use std::collections::BTreeMap;
use std::rc::Rc;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Signals the salary page renders from
#[derive(Clone, Copy)]
struct SignalSalaryView {
    toasts: ToastService,
    busy: RwSignal<bool>,
    rows: RwSignal<Vec<SalaryRecord>>,
    total_rows: RwSignal<usize>,
    summary: RwSignal<Option<DashboardSummary>>,
    charts: RwSignal<ChartSet>,
    sort: RwSignal<SortState>,
}

impl Notifier for SignalSalaryView {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.notify(kind, message);
    }
}

impl SalaryView for SignalSalaryView {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn render_results(&self, state: &SalaryDashboardState) {
        self.rows.set(state.visible().into_iter().cloned().collect());
        self.total_rows.set(state.records.len());
        self.summary.set(Some(state.summary.clone()));
        if self.charts.with_untracked(|c| c.generation) != state.charts.generation {
            self.charts.set(state.charts.clone());
        }
        self.sort.set(state.sort.clone());
    }

    fn download(&self, bytes: &[u8], mime: &str, filename: &str) -> Result<(), AppError> {
        download_bytes(bytes, mime, filename)
    }

    fn print(&self, html: &str) -> Result<(), AppError> {
        open_print_window(html)
    }
}

type Controller = SalaryController<HttpSalaryApi, SignalSalaryView>;

/// Salary calculation page: form, KPI tiles, charts, table and exports
#[component]
pub fn SalaryDashboard() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let toasts = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");
    let currency = config.ui.currency.clone();
    let debounce_ms = config.ui.search_debounce_ms;

    let view_state = SignalSalaryView {
        toasts,
        busy: RwSignal::new(false),
        rows: RwSignal::new(Vec::new()),
        total_rows: RwSignal::new(0),
        summary: RwSignal::new(None),
        charts: RwSignal::new(ChartSet::default()),
        sort: RwSignal::new(SortState::default()),
    };
    let controller: StoredValue<Rc<Controller>, LocalStorage> = StoredValue::new_local(Rc::new(
        SalaryController::new(HttpSalaryApi::new(config.api.base_url.clone()), view_state, currency.clone()),
    ));

    // Form inputs
    let now = Utc::now().date_naive();
    let category = RwSignal::new(None::<Category>);
    let month = RwSignal::new(now.month().to_string());
    let year = RwSignal::new(now.year().to_string());
    let params = RwSignal::new(BTreeMap::<String, String>::new());

    let details = RwSignal::new(None::<SalaryRecord>);
    let csv_busy = RwSignal::new(false);

    let on_calculate = move |_| {
        let form = SalaryForm {
            category: category.get_untracked(),
            month: month.get_untracked(),
            year: year.get_untracked(),
            params: params.get_untracked(),
        };
        let ctrl = controller.get_value();
        spawn_local(async move {
            // Outcome is already reported through the view
            let _ = ctrl.submit(&form).await;
        });
    };

    let on_search = Callback::new(move |term: String| {
        controller.with_value(|c| c.search(&term));
    });

    let on_download_csv = move |_| {
        csv_busy.set(true);
        let _ = controller.with_value(|c| c.export_csv());
        csv_busy.set(false);
    };

    let on_payslip = move |record: SalaryRecord| {
        let _ = controller.with_value(|c| c.generate_payslip(&record));
    };

    let stat = move |f: fn(&DashboardSummary, &str) -> String, currency: String| {
        Signal::derive(move || {
            view_state
                .summary
                .with(|s| StatValue::Ready(s.as_ref().map(|s| f(s, &currency)).unwrap_or_else(|| "0".into())))
        })
    };

    let details_currency = currency.clone();
    let table_currency = currency.clone();

    view! {
        <div id="d500_salary--dashboard" class="salary-dashboard">
            <section class="card salary-form">
                <h2 class="card__title">"Salary Calculator"</h2>

                <div class="category-picker">
                    {Category::all().into_iter().map(|c| view! {
                        <button
                            class=move || if category.get() == Some(c) { "category-btn active" } else { "category-btn" }
                            on:click=move |_| category.set(Some(c))
                        >
                            {icon(c.icon())}
                            <span>{c.code()}</span>
                        </button>
                    }).collect_view()}
                </div>

                <Flex gap=FlexGap::Medium align=FlexAlign::End>
                    <label class="form-field">
                        <span>"Month"</span>
                        <select
                            class="form-control"
                            prop:value=move || month.get()
                            on:change=move |ev| month.set(event_target_value(&ev))
                        >
                            <option value="">"Select month"</option>
                            {MONTHS.iter().enumerate().map(|(idx, name)| {
                                let value = (idx + 1).to_string();
                                view! { <option value=value.clone() selected=move || month.get() == value>{*name}</option> }
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="form-field">
                        <span>"Year"</span>
                        <input
                            type="number"
                            class="form-control"
                            min="2000"
                            max="9999"
                            prop:value=move || year.get()
                            on:input=move |ev| year.set(event_target_value(&ev))
                        />
                    </label>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=view_state.busy
                        loading=view_state.busy
                        on_click=on_calculate
                    >
                        {icon("calculator")}
                        " Calculate Salaries"
                    </Button>
                </Flex>

                <ParamsForm category=category values=params />
            </section>

            <Show when=move || view_state.busy.get()>
                <div class="salary-dashboard__loading">
                    <Spinner />
                    <span>"Calculating salaries..."</span>
                </div>
            </Show>

            <Show when=move || view_state.summary.with(|s| s.is_some())>
                <section class="stat-grid">
                    <StatCard
                        label="Total Employees"
                        icon_name="users"
                        value=stat(|s, _| s.employee_count.to_string(), String::new())
                    />
                    <StatCard
                        label="Total Salary"
                        icon_name="wallet"
                        value=stat(|s, cur| format_currency(s.total_salary, cur), currency.clone())
                    />
                    <StatCard
                        label="Total Bonuses"
                        icon_name="wallet"
                        value=stat(|s, cur| format_currency(s.total_bonus, cur), currency.clone())
                    />
                    <StatCard
                        label="Total Orders"
                        icon_name="box"
                        value=stat(|s, _| format_number_int(s.total_orders as f64), String::new())
                    />
                </section>

                <section class="chart-grid">
                    {move || {
                        let charts = view_state.charts.get();
                        [charts.salary, charts.bonus]
                            .into_iter()
                            .flatten()
                            .map(|chart: BarChart| view! { <BarChartView chart=chart /> })
                            .collect_view()
                    }}
                </section>
            </Show>

            <section class="card salary-results">
                <div class="table-toolbar">
                    <SearchInput
                        on_change=on_search
                        placeholder="Search employees..."
                        delay_ms=debounce_ms
                    />
                    <span class="table-toolbar__count">
                        {move || format!("{} of {} rows", view_state.rows.with(|r| r.len()), view_state.total_rows.get())}
                    </span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=csv_busy
                        on_click=on_download_csv
                    >
                        {icon("download")}
                        " Download CSV"
                    </Button>
                </div>

                <div class="table-container">
                    <table class="data-table" id="salaryTable">
                        <thead>
                            <tr>
                                {COLUMNS.iter().map(|column| {
                                    let key = column.key;
                                    view! {
                                        <th
                                            class="sortable"
                                            on:click=move |_| controller.with_value(|c| c.toggle_sort(key))
                                        >
                                            {column.header}
                                            <span class="sort-indicator">
                                                {move || view_state.sort.with(|s| s.indicator(key))}
                                            </span>
                                        </th>
                                    }
                                }).collect_view()}
                                <th>{ACTIONS_HEADER}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let currency = table_currency.clone();
                                view_state.rows.get().into_iter().map(|record| {
                                    let cells = COLUMNS
                                        .iter()
                                        .map(|column| view! { <td>{cell_text(&record, column, &currency)}</td> })
                                        .collect_view();
                                    let for_details = record.clone();
                                    let for_payslip = record.clone();
                                    view! {
                                        <tr>
                                            {cells}
                                            <td class="table-actions">
                                                <button
                                                    class="button button--small button--primary"
                                                    on:click=move |_| details.set(Some(for_details.clone()))
                                                >
                                                    {icon("info")}
                                                    " Details"
                                                </button>
                                                <button
                                                    class="button button--small button--secondary"
                                                    on:click=move |_| on_payslip(for_payslip.clone())
                                                >
                                                    {icon("file")}
                                                    " Payslip"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </section>

            {move || details.get().map(|record| view! {
                <SalaryDetailsModal
                    record=record
                    currency=details_currency.clone()
                    on_close=Callback::new(move |_| details.set(None))
                />
            })}
        </div>
    }
}
