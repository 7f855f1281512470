use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Search box that reports its value once typing pauses for `delay_ms`.
/// Clearing reports immediately.
#[component]
pub fn SearchInput(
    /// Callback receiving the settled search term
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(default = 300)]
    delay_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let debouncer = StoredValue::new_local(Debouncer::new());

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let settled = debouncer.with_value(|d| d.debounce(delay_ms, move || on_change.run(new_value)));
        spawn_local(async move {
            settled.await;
        });
    };

    let clear_filter = move |_| {
        debouncer.with_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="button button--icon search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
