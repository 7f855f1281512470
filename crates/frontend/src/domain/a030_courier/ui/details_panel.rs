use crate::domain::a030_courier::state::PanelState;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Side panel listing every column of the selected courier
#[component]
pub fn CourierDetailsPanel(
    #[prop(into)] panel: Signal<PanelState>,
    on_close: Callback<()>,
) -> impl IntoView {
    let fields = move || {
        panel.with(|p| p.record().map(|record| record.fields()).unwrap_or_default())
    };
    let title = move || {
        panel.with(|p| {
            p.record()
                .and_then(|record| record.name())
                .unwrap_or_else(|| "Courier Details".to_string())
        })
    };

    view! {
        <aside
            id="courierDetailsPanel"
            class=move || if panel.with(|p| p.is_open()) { "side-panel side-panel--open" } else { "side-panel" }
        >
            <div class="side-panel__header">
                <h3 class="side-panel__title">{title}</h3>
                <button class="button button--ghost" on:click=move |_| on_close.run(()) title="Close">
                    {icon("x")}
                </button>
            </div>
            <dl class="side-panel__body">
                {move || fields().into_iter().map(|(key, value)| view! {
                    <div class="detail-row">
                        <dt>{key.replace('_', " ")}</dt>
                        <dd>{value}</dd>
                    </div>
                }).collect_view()}
            </dl>
        </aside>
    }
}
