//! Pure route-guard decisions, kept free of DOM types so they can be tested
//! natively.

use crate::routes::Route;
use factorysphere_core::access::{Page, first_allowed_page};
use factorysphere_core::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Show the login page.
    Login,
    /// Show the not-found page.
    NotFound,
    /// Show a gated feature page.
    Page(Page),
    /// Navigate elsewhere instead of rendering.
    Redirect(Route),
}

/// Decide what the current route renders for the current session.
///
/// Unauthenticated subjects are sent to login; authenticated subjects
/// hitting a forbidden page are sent to the dashboard fallback rather than
/// an error page. An authenticated visit to the login route forwards to the
/// first page the role may see.
#[must_use]
pub fn decide_route(route: &Route, session: &Session) -> RouteDecision {
    let subject = session.subject();
    match route {
        Route::Login => {
            if subject.authenticated {
                let target =
                    first_allowed_page(&subject).map_or(Route::Dashboard, Route::from_page);
                RouteDecision::Redirect(target)
            } else {
                RouteDecision::Login
            }
        }
        Route::NotFound => RouteDecision::NotFound,
        _ => {
            let Some(page) = route.to_page() else {
                return RouteDecision::NotFound;
            };
            if !subject.authenticated {
                RouteDecision::Redirect(Route::Login)
            } else if subject.can_access(page) {
                RouteDecision::Page(page)
            } else if page == Page::Dashboard {
                // locked out of the fallback page itself: only login is safe
                RouteDecision::Redirect(Route::Login)
            } else {
                RouteDecision::Redirect(Route::Dashboard)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: &str) -> Session {
        Session {
            role: role.to_string(),
            email: "user@plant.example".to_string(),
        }
    }

    #[test]
    fn unauthenticated_requests_redirect_to_login() {
        let anon = Session::default();
        for route in [Route::Dashboard, Route::Devices, Route::Reports] {
            assert_eq!(
                decide_route(&route, &anon),
                RouteDecision::Redirect(Route::Login)
            );
        }
        assert_eq!(decide_route(&Route::Login, &anon), RouteDecision::Login);
    }

    #[test]
    fn supervisor_reaches_devices_directly() {
        let s = session("Supervisor");
        assert_eq!(
            decide_route(&Route::Devices, &s),
            RouteDecision::Page(Page::Devices)
        );
    }

    #[test]
    fn forbidden_pages_fall_back_to_dashboard() {
        let s = session("Supervisor");
        // supervisors have no analytics grant
        assert_eq!(
            decide_route(&Route::Analytics, &s),
            RouteDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn authenticated_login_visit_forwards_to_first_allowed_page() {
        let s = session("TeamLeader");
        assert_eq!(
            decide_route(&Route::Login, &s),
            RouteDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn unknown_role_still_lands_on_dashboard() {
        let s = session("summer_intern");
        assert_eq!(
            decide_route(&Route::Dashboard, &s),
            RouteDecision::Page(Page::Dashboard)
        );
        assert_eq!(
            decide_route(&Route::Devices, &s),
            RouteDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn not_found_renders_not_found() {
        assert_eq!(
            decide_route(&Route::NotFound, &session("PlantManager")),
            RouteDecision::NotFound
        );
    }
}
