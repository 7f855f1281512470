use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual state of a KPI tile
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Loading,
    Ready(String),
    Failed,
}

impl StatValue {
    pub fn text(&self) -> String {
        match self {
            StatValue::Loading => "…".to_string(),
            StatValue::Ready(v) => v.clone(),
            StatValue::Failed => "-".to_string(),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            StatValue::Loading => "stat-card stat-card--loading",
            StatValue::Ready(_) => "stat-card",
            StatValue::Failed => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    value: Signal<StatValue>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=move || value.with(|v| v.class())>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.with(|v| v.text())}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
