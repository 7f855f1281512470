use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Salary,
    Couriers,
}

impl Page {
    pub fn all() -> [Page; 2] {
        [Page::Salary, Page::Couriers]
    }

    /// Value of the `page` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Page::Salary => "salary",
            Page::Couriers => "couriers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Salary => "Salary Dashboard",
            Page::Couriers => "Couriers",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Salary => "wallet",
            Page::Couriers => "bike",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::all().into_iter().find(|p| p.key() == key)
    }

    /// Page named by a query string such as `?page=couriers`
    pub fn from_query(search: &str) -> Page {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params
            .get("page")
            .and_then(|key| Page::from_key(key))
            .unwrap_or_default()
    }

    pub fn to_query(&self) -> String {
        let query = serde_qs::to_string(&HashMap::from([("page".to_string(), self.key().to_string())]))
            .unwrap_or_default();
        format!("?{}", query)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
        }
    }

    /// Read the active page from the URL and keep the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active.set(Page::from_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = this.active.get().to_query();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page '{}'", page.key());
        self.active.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_from_query() {
        assert_eq!(Page::from_query("?page=couriers"), Page::Couriers);
        assert_eq!(Page::from_query("page=salary"), Page::Salary);
        assert_eq!(Page::from_query(""), Page::Salary);
        assert_eq!(Page::from_query("?page=unknown"), Page::Salary);
    }

    #[test]
    fn query_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_query(&page.to_query()), page);
        }
        assert_eq!(Page::Couriers.to_query(), "?page=couriers");
    }
}
