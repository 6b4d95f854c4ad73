#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    Dashboard,
    Sales,
    Inventory,
    SmartPricing,
    Expenses,
    Schemes,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Dashboard,
        Page::Sales,
        Page::Inventory,
        Page::SmartPricing,
        Page::Expenses,
        Page::Schemes,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Dashboard => "/dashboard",
            Page::Sales => "/sales",
            Page::Inventory => "/inventory",
            Page::SmartPricing => "/smart-pricing",
            Page::Expenses => "/expenses",
            Page::Schemes => "/schemes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Sales => "Sales Tracking",
            Page::Inventory => "Inventory Management",
            Page::SmartPricing => "Smart Pricing & Analytics",
            Page::Expenses => "Expense Tracker",
            Page::Schemes => "Govt Schemes",
        }
    }

    /// Unknown paths land on the front page. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Page {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL
            .into_iter()
            .find(|p| p.path() == normalized)
            .unwrap_or(Page::Home)
    }

    pub fn current() -> Page {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|p| Page::from_path(&p))
            .unwrap_or(Page::Home)
    }

    pub fn push_history(self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(history) = window.history() {
            if let Err(err) =
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(self.path()))
            {
                log::warn!("could not update location to {}: {:?}", self.path(), err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Page::Home)]
    #[case("", Page::Home)]
    #[case("/dashboard", Page::Dashboard)]
    #[case("/sales/", Page::Sales)]
    #[case("/inventory", Page::Inventory)]
    #[case("/smart-pricing", Page::SmartPricing)]
    #[case("/expenses", Page::Expenses)]
    #[case("/schemes", Page::Schemes)]
    #[case("/nowhere", Page::Home)]
    fn paths_map_to_pages(#[case] path: &str, #[case] page: Page) {
        assert_eq!(Page::from_path(path), page);
    }

    #[test]
    fn every_page_round_trips_through_its_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }
}
