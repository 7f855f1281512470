use contracts::dashboards::d500_salary::Category;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Numeric inputs of the selected category. Values stay raw strings until
/// the form is validated.
#[component]
pub fn ParamsForm(
    #[prop(into)] category: Signal<Option<Category>>,
    values: RwSignal<BTreeMap<String, String>>,
) -> impl IntoView {
    view! {
        {move || match category.get() {
            None => view! {
                <p class="params-form__hint">"Select a category to adjust its parameters."</p>
            }.into_any(),
            Some(category) => view! {
                <div class="params-form">
                    <h4 class="params-form__title">{format!("{} Parameters", category)}</h4>
                    <div class="params-form__grid">
                        {category.params().iter().map(|field| {
                            let id = field.id;
                            view! {
                                <label class="params-form__field">
                                    <span>{field.label}</span>
                                    <input
                                        id=id
                                        type="number"
                                        step="any"
                                        class="form-control"
                                        placeholder=field.placeholder
                                        prop:value=move || values.with(|v| v.get(id).cloned().unwrap_or_default())
                                        on:input=move |ev| {
                                            let raw = event_target_value(&ev);
                                            values.update(|v| {
                                                v.insert(id.to_string(), raw);
                                            });
                                        }
                                    />
                                </label>
                            }
                        }).collect_view()}
                    </div>
                </div>
            }.into_any(),
        }}
    }
}
