use crate::app::guard::{RouteDecision, decide_route};
use crate::app::state::AppState;
use crate::components::sidebar::Sidebar;
use crate::components::topbar::Topbar;
use crate::pages::alarms::AlarmsPage;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::cameras::CamerasPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::devices::DevicesPage;
use crate::pages::downtime::DowntimePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFound;
use crate::pages::reports::ReportsPage;
use crate::routes::Route;
use factorysphere_core::access::Page;
use factorysphere_core::session::Session;
use yew::prelude::*;
use yew_router::prelude::*;

/// Render the view for the current route and session.
pub fn render_route(state: &AppState, route: &Route, navigator: Option<Navigator>) -> Html {
    match decide_route(route, &state.session) {
        RouteDecision::Login => {
            let session = state.session.clone();
            let on_login = Callback::from(move |(role, email): (String, String)| {
                session.set(crate::session::login(&role, &email));
            });
            html! { <LoginPage {on_login} /> }
        }
        RouteDecision::NotFound => {
            let on_go_home = {
                let navigator = navigator.clone();
                let authed = state.session.is_authenticated();
                Callback::from(move |()| {
                    if let Some(nav) = navigator.as_ref() {
                        let target = if authed { Route::Dashboard } else { Route::Login };
                        nav.push(&target);
                    }
                })
            };
            html! { <NotFound {on_go_home} /> }
        }
        RouteDecision::Page(page) => render_shell(state, page, navigator),
        RouteDecision::Redirect(target) => html! { <Redirect<Route> to={target} /> },
    }
}

fn render_shell(state: &AppState, page: Page, navigator: Option<Navigator>) -> Html {
    let subject = state.session.subject();

    let on_navigate = {
        let navigator = navigator.clone();
        Callback::from(move |page: Page| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::from_page(page));
            }
        })
    };

    let on_logout = {
        let session = state.session.clone();
        Callback::from(move |()| {
            crate::session::logout();
            session.set(Session::default());
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Login);
            }
        })
    };

    let on_toggle_sidebar = {
        let collapsed = state.sidebar_collapsed.clone();
        Callback::from(move |()| collapsed.set(!*collapsed))
    };

    html! {
        <div class="app-shell">
            <Sidebar
                subject={subject}
                active={Some(page)}
                collapsed={*state.sidebar_collapsed}
                {on_navigate}
            />
            <div class="app-main">
                <Topbar
                    session={(*state.session).clone()}
                    {on_toggle_sidebar}
                    {on_logout}
                />
                <main id="main" class="app-content">
                    { render_page(state, page) }
                </main>
            </div>
        </div>
    }
}

fn render_page(state: &AppState, page: Page) -> Html {
    match page {
        Page::Dashboard => html! { <DashboardPage units={state.units.clone()} /> },
        Page::Devices => html! {
            <DevicesPage registry={state.registry.clone()} units={state.units.clone()} />
        },
        Page::Alarms => html! { <AlarmsPage units={state.units.clone()} /> },
        Page::Downtime => html! { <DowntimePage units={state.units.clone()} /> },
        Page::Analytics => html! { <AnalyticsPage units={state.units.clone()} /> },
        Page::Cameras => html! {
            <CamerasPage registry={state.registry.clone()} units={state.units.clone()} />
        },
        Page::Reports => html! { <ReportsPage units={state.units.clone()} /> },
    }
}
