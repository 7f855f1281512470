use super::details_panel::CourierDetailsPanel;
use super::filter_form::CourierFilterForm;
use super::list::CourierList;
use crate::domain::a030_courier::api::HttpCourierApi;
use crate::domain::a030_courier::controller::{CourierController, CourierView};
use crate::domain::a030_courier::state::{CourierDirectoryState, PanelState};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{StatCard, StatValue};
use crate::shared::config::ClientConfig;
use crate::shared::pagination::Pagination;
use contracts::domain::a030_courier::{CourierFilterRequest, CourierRecord, Scorecard};
use leptos::prelude::*;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
struct SignalCourierView {
    scorecards: RwSignal<BTreeMap<Scorecard, StatValue>>,
    rows: RwSignal<Vec<CourierRecord>>,
    message: RwSignal<Option<String>>,
    pagination: RwSignal<Pagination>,
    panel: RwSignal<PanelState>,
}

impl CourierView for SignalCourierView {
    fn render_scorecard(&self, scorecard: Scorecard, state: &CourierDirectoryState) {
        let value = state.scorecard(scorecard);
        self.scorecards.update(|tiles| {
            tiles.insert(scorecard, value);
        });
    }

    fn render_list(&self, state: &CourierDirectoryState) {
        self.rows.set(state.page_rows().to_vec());
        self.message.set(state.list_message.clone());
        self.pagination.set(state.pagination);
    }

    fn render_panel(&self, panel: &PanelState) {
        self.panel.set(panel.clone());
    }
}

type Controller = CourierController<HttpCourierApi, SignalCourierView>;

/// Courier directory page: scorecards, filters, paged list and details panel
#[component]
pub fn CourierDirectory() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let page_size = config.ui.default_page_size;

    let view_state = SignalCourierView {
        scorecards: RwSignal::new(CourierDirectoryState::default().scorecards),
        rows: RwSignal::new(Vec::new()),
        message: RwSignal::new(None),
        pagination: RwSignal::new(Pagination::new(page_size)),
        panel: RwSignal::new(PanelState::Closed),
    };
    let controller: StoredValue<Rc<Controller>, LocalStorage> = StoredValue::new_local(Rc::new(
        CourierController::new(HttpCourierApi::new(config.api.base_url.clone()), view_state, page_size),
    ));
    let busy = RwSignal::new(false);

    let load_all = move || {
        let ctrl = controller.get_value();
        busy.set(true);
        spawn_local(async move {
            let _ = ctrl.load_all().await;
            busy.set(false);
        });
    };

    // Initial load: tiles and list are independent
    {
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.load_scorecards().await;
        });
        load_all();
    }

    let on_filter = Callback::new(move |request: CourierFilterRequest| {
        let ctrl = controller.get_value();
        busy.set(true);
        spawn_local(async move {
            let _ = ctrl.filter(&request).await;
            busy.set(false);
        });
    });

    let on_select = Callback::new(move |barq_id: String| {
        let ctrl = controller.get_value();
        spawn_local(async move {
            let _ = ctrl.select(&barq_id).await;
        });
    });

    let tile = move |scorecard: Scorecard| {
        Signal::derive(move || {
            view_state
                .scorecards
                .with(|tiles| tiles.get(&scorecard).cloned().unwrap_or(StatValue::Loading))
        })
    };

    view! {
        <div id="a030_courier--directory" class="courier-directory">
            <section class="stat-grid stat-grid--six">
                {Scorecard::all().into_iter().map(|scorecard| view! {
                    <div id=scorecard.code()>
                        <StatCard
                            label=scorecard.label()
                            icon_name=scorecard.icon()
                            value=tile(scorecard)
                        />
                    </div>
                }).collect_view()}
            </section>

            <section class="card">
                <h2 class="card__title">"Courier Directory"</h2>
                <CourierFilterForm
                    on_filter=on_filter
                    on_reset=Callback::new(move |_| load_all())
                    busy=busy
                />

                <CourierList
                    rows=view_state.rows
                    message=view_state.message
                    on_select=on_select
                />

                <PaginationControls
                    current_page=Signal::derive(move || view_state.pagination.with(|p| p.page()))
                    total_pages=Signal::derive(move || view_state.pagination.with(|p| p.page_count()))
                    page_size=Signal::derive(move || view_state.pagination.with(|p| p.page_size()))
                    on_previous=Callback::new(move |_| {
                        controller.with_value(|c| c.previous_page());
                    })
                    on_next=Callback::new(move |_| {
                        controller.with_value(|c| c.next_page());
                    })
                    on_page_size_change=Callback::new(move |size: usize| {
                        controller.with_value(|c| c.set_page_size(size));
                    })
                    page_size_options=config.ui.page_size_options.clone()
                />
            </section>

            <CourierDetailsPanel
                panel=view_state.panel
                on_close=Callback::new(move |_| controller.with_value(|c| c.close()))
            />
        </div>
    }
}
