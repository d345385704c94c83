use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::auth::DiscordAuthService;

/// Scopes requested at login.
pub(super) const OAUTH_SCOPES: [&str; 2] = ["identify", "guilds"];

impl<'a> DiscordAuthService<'a> {
    /// Builds the Discord authorize URL and the CSRF state it carries.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(OAUTH_SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .url();

        (authorize_url, csrf_state)
    }
}
