use crate::shared::icons::icon;
use contracts::domain::a030_courier::CourierFilterRequest;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterField {
    Name,
    Date,
    BarqId,
    Status,
    IdNumber,
    Sponsorship,
}

impl FilterField {
    const ALL: [FilterField; 6] = [
        FilterField::Name,
        FilterField::Date,
        FilterField::BarqId,
        FilterField::Status,
        FilterField::IdNumber,
        FilterField::Sponsorship,
    ];

    fn label(self) -> &'static str {
        match self {
            FilterField::Name => "Courier Name",
            FilterField::Date => "Joining Date",
            FilterField::BarqId => "BARQ ID",
            FilterField::Status => "Status",
            FilterField::IdNumber => "ID Number",
            FilterField::Sponsorship => "Sponsorship",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            FilterField::Date => "date",
            _ => "text",
        }
    }

    fn get(self, request: &CourierFilterRequest) -> &str {
        match self {
            FilterField::Name => &request.courier_name,
            FilterField::Date => &request.filter_date,
            FilterField::BarqId => &request.filter_barq_id,
            FilterField::Status => &request.filter_status,
            FilterField::IdNumber => &request.filter_id_number,
            FilterField::Sponsorship => &request.filter_sponsorship,
        }
    }

    fn set(self, request: &mut CourierFilterRequest, value: String) {
        let slot = match self {
            FilterField::Name => &mut request.courier_name,
            FilterField::Date => &mut request.filter_date,
            FilterField::BarqId => &mut request.filter_barq_id,
            FilterField::Status => &mut request.filter_status,
            FilterField::IdNumber => &mut request.filter_id_number,
            FilterField::Sponsorship => &mut request.filter_sponsorship,
        };
        *slot = value;
    }
}

/// The six optional filter fields; blank fields are sent as empty strings
#[component]
pub fn CourierFilterForm(
    on_filter: Callback<CourierFilterRequest>,
    /// Clears the fields and reloads the unfiltered list
    on_reset: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let request = RwSignal::new(CourierFilterRequest::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_filter.run(request.get_untracked());
    };

    let reset = move |_| {
        request.set(CourierFilterRequest::default());
        on_reset.run(());
    };

    view! {
        <form class="filter-form" on:submit=submit>
            <div class="filter-form__grid">
                {FilterField::ALL.into_iter().map(|field| view! {
                    <label class="form-field">
                        <span>{field.label()}</span>
                        <input
                            type=field.input_type()
                            class="form-control"
                            prop:value=move || request.with(|r| field.get(r).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                request.update(|r| field.set(r, value));
                            }
                        />
                    </label>
                }).collect_view()}
            </div>
            <div class="filter-form__actions">
                <button type="submit" class="button button--primary" disabled=move || busy.get()>
                    {icon("filter")}
                    " Apply Filters"
                </button>
                <button type="button" class="button button--secondary" on:click=reset disabled=move || busy.get()>
                    {icon("refresh")}
                    " Reset"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_map_onto_request() {
        let mut request = CourierFilterRequest::default();
        for (i, field) in FilterField::ALL.into_iter().enumerate() {
            field.set(&mut request, format!("v{}", i));
        }
        assert_eq!(request.courier_name, "v0");
        assert_eq!(request.filter_barq_id, "v2");
        assert_eq!(request.filter_sponsorship, "v5");
        assert_eq!(FilterField::Status.get(&request), "v3");
    }
}
