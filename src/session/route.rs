//! Route gating decisions derived from the session view

use super::SessionView;

/// Landing route for anonymous users
pub const LOGIN_ROUTE: &str = "/";
/// Landing route once authenticated
pub const HOME_ROUTE: &str = "/in/books";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session is still being validated
    Loading,
    Allow,
    Redirect(&'static str),
}

/// Gate for routes that need an authenticated session.
pub fn protected(view: SessionView) -> RouteDecision {
    if view.loading {
        RouteDecision::Loading
    } else if !view.is_authenticated {
        RouteDecision::Redirect(LOGIN_ROUTE)
    } else {
        RouteDecision::Allow
    }
}

/// Gate for routes only anonymous users should see (login page).
pub fn public(view: SessionView) -> RouteDecision {
    if view.is_authenticated {
        RouteDecision::Redirect(HOME_ROUTE)
    } else {
        RouteDecision::Allow
    }
}
