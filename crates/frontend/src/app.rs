use crate::dashboards::SalaryDashboard;
use crate::domain::a030_courier::ui::CourierDirectory;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::shared::config::load_config;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!("API base: '{}'", config.api.base_url);

    // Toasts are shared by every page
    provide_context(ToastService::new(config.ui.toast_delay_ms));
    provide_context(config);

    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <Shell>
            {move || match ctx.active.get() {
                Page::Salary => view! { <SalaryDashboard /> }.into_any(),
                Page::Couriers => view! { <CourierDirectory /> }.into_any(),
            }}
        </Shell>
        <ToastHost />
    }
}
