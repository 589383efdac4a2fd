//! Route Table
//!
//! Which paths need a session, where to go when they don't get one, and
//! where successful submissions lead.

use crate::config::AnonymousHome;
use crate::models::{BoardId, PinId};

pub const AFTER_LOGIN: &str = "/";
pub const AFTER_SIGNUP: &str = "/login";
pub const AFTER_LOGOUT: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Boards,
    BoardPins(BoardId),
    PinDetail(PinId),
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Rendered for everyone
    Open,
    /// Only without a session; logged-in users are sent home
    GuestOnly,
    /// Only with a session; guests are sent to login
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Render,
    Redirect(&'static str),
}

/// What the root path shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeView {
    Feed,
    Login,
    Boards,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Boards => "/boards".to_string(),
            Route::BoardPins(id) => format!("/boards/{}", id),
            Route::PinDetail(id) => format!("/pins/{}", id),
            Route::Search => "/search".to_string(),
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Home => Access::Open,
            Route::Login | Route::Signup => Access::GuestOnly,
            Route::Boards | Route::BoardPins(_) | Route::PinDetail(_) | Route::Search => {
                Access::Protected
            }
        }
    }
}

/// Decide at render time; nothing is revalidated against the server
pub fn guard(access: Access, authenticated: bool) -> Guard {
    match (access, authenticated) {
        (Access::GuestOnly, true) => Guard::Redirect(AFTER_LOGIN),
        (Access::Protected, false) => Guard::Redirect("/login"),
        _ => Guard::Render,
    }
}

pub fn home_view(authenticated: bool, anonymous: AnonymousHome) -> HomeView {
    match (authenticated, anonymous) {
        (true, _) => HomeView::Feed,
        (false, AnonymousHome::Login) => HomeView::Login,
        (false, AnonymousHome::Boards) => HomeView::Boards,
    }
}
