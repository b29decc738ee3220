pub mod cookies;
pub mod dto;
pub mod session;

pub use cookies::{CookieJar, CookieStore};
pub use dto::{Action, ResponseStatus, TokenState};
pub use session::{
    get_home_url, get_login_url, get_logout_url, get_token, handle_auth_error,
    is_user_authenticated, AuthResponse, Dispatch,
};
