use factorysphere_core::registry::Registry;
use factorysphere_core::session::Session;
use factorysphere_core::telemetry::{UnitSnapshot, plant_units};
use std::rc::Rc;
use yew::prelude::*;

/// Hook state shared by the whole shell.
#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<Session>,
    pub registry: Rc<Registry>,
    pub units: Rc<Vec<UnitSnapshot>>,
    pub sidebar_collapsed: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let session = crate::session::use_session();
    let registry = use_memo((), |_| Registry::default());
    let units = {
        let registry = registry.clone();
        use_memo((), move |_| plant_units(&registry))
    };
    AppState {
        session,
        registry,
        units,
        sidebar_collapsed: use_state(|| false),
    }
}
