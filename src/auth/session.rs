use tokio::sync::mpsc::UnboundedSender;

use crate::error::{DashboardError, Result};
use crate::naming::get_user_url;

use super::cookies::CookieStore;
use super::dto::{Action, ResponseStatus, TokenState};

const USER_COOKIE: &str = "user";
const TOKEN_COOKIE: &str = "token";
const LOGIN_PATH: &str = "/users/login/";
const LOGOUT_PATH: &str = "/users/logout/";

/// Hands actions to the application. Implementations must not block the caller.
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

impl<F> Dispatch for F
where
    F: Fn(Action),
{
    fn dispatch(&self, action: Action) {
        self(action)
    }
}

impl Dispatch for UnboundedSender<Action> {
    fn dispatch(&self, action: Action) {
        if self.send(action).is_err() {
            tracing::warn!("Dropped {:?}: action receiver is closed", action);
        }
    }
}

/// The parts of a finished request the auth check looks at.
pub trait AuthResponse {
    fn is_ok(&self) -> bool;
    fn status_text(&self) -> String;
}

impl AuthResponse for ResponseStatus {
    fn is_ok(&self) -> bool {
        self.ok
    }

    fn status_text(&self) -> String {
        self.status_text.clone()
    }
}

impl AuthResponse for reqwest::Response {
    fn is_ok(&self) -> bool {
        self.status().is_success()
    }

    fn status_text(&self) -> String {
        self.status().canonical_reason().unwrap_or_default().to_string()
    }
}

/// Both cookies or nothing.
pub fn get_token<C: CookieStore + ?Sized>(cookies: &C) -> Option<TokenState> {
    let user = cookies.get(USER_COOKIE)?;
    let token = cookies.get(TOKEN_COOKIE)?;
    Some(TokenState { token, user })
}

pub fn is_user_authenticated<C: CookieStore + ?Sized>(cookies: &C) -> bool {
    get_token(cookies).is_some()
}

/// Reads the `user` cookie on its own; without it the link points at `/app/undefined/`.
pub fn get_home_url<C: CookieStore + ?Sized>(cookies: &C) -> String {
    let user = cookies
        .get(USER_COOKIE)
        .unwrap_or_else(|| "undefined".to_string());
    format!("{}/", get_user_url(&user))
}

pub fn get_login_url(base_url: &str, external: bool) -> String {
    if external {
        format!("{}{}", base_url, LOGIN_PATH)
    } else {
        LOGIN_PATH.to_string()
    }
}

pub fn get_logout_url() -> String {
    LOGOUT_PATH.to_string()
}

/// Passes a successful response through. Otherwise asks the app to refetch the
/// current user and fails with the response's status text.
///
/// The dispatch is fire-and-forget; it may still be in flight when this returns.
pub fn handle_auth_error<R, D>(response: R, dispatch: &D) -> Result<R>
where
    R: AuthResponse,
    D: Dispatch + ?Sized,
{
    if !response.is_ok() {
        let status_text = response.status_text();
        tracing::warn!("Request rejected ({}), refetching current user", status_text);
        dispatch.dispatch(Action::FetchUser);
        return Err(DashboardError::Unauthorized { status_text });
    }
    Ok(response)
}
