use factorysphere_core::access::Page;
use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/devices")]
    Devices,
    #[at("/alarms")]
    Alarms,
    #[at("/downtime")]
    Downtime,
    #[at("/analytics")]
    Analytics,
    #[at("/cameras")]
    Cameras,
    #[at("/reports")]
    Reports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_page(page: Page) -> Self {
        match page {
            Page::Dashboard => Route::Dashboard,
            Page::Devices => Route::Devices,
            Page::Alarms => Route::Alarms,
            Page::Downtime => Route::Downtime,
            Page::Analytics => Route::Analytics,
            Page::Cameras => Route::Cameras,
            Page::Reports => Route::Reports,
        }
    }

    #[must_use]
    pub const fn to_page(&self) -> Option<Page> {
        match self {
            Route::Dashboard => Some(Page::Dashboard),
            Route::Devices => Some(Page::Devices),
            Route::Alarms => Some(Page::Alarms),
            Route::Downtime => Some(Page::Downtime),
            Route::Analytics => Some(Page::Analytics),
            Route::Cameras => Some(Page::Cameras),
            Route::Reports => Some(Page::Reports),
            Route::Login | Route::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_route_mapping_roundtrips() {
        for page in Page::ALL {
            let route = Route::from_page(page);
            assert_eq!(route.to_page(), Some(page));
        }
    }

    #[test]
    fn meta_routes_map_to_no_page() {
        assert_eq!(Route::Login.to_page(), None);
        assert_eq!(Route::NotFound.to_page(), None);
    }

    #[test]
    fn route_paths_match_the_menu_definition() {
        use factorysphere_core::access::NAV_ITEMS;
        for item in NAV_ITEMS {
            let route = Route::from_page(item.page);
            assert_eq!(route.to_path(), item.path);
        }
    }
}
