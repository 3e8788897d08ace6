//! The external identity-provider boundary.
//!
//! ERROR HANDLING
//! ==============
//! Every call is a single attempt — no retries — and a failure surfaces as
//! a plain message string for the page to show verbatim. The provider is
//! opaque: we only consume sign-in, federated sign-in, account
//! registration, and the current-session lookup.

use serde::Deserialize;

/// The provider's view of a signed-in account. Distinct from the buyer
/// profile in the state tree, which is minted by the registration flow.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

const AUTH_BASE: &str = "/auth";

/// Sign in with an email/password pair.
///
/// # Errors
///
/// A display-ready message when the provider is unreachable or rejects the
/// credentials.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthUser, String> {
    credential_call("sign-in", email, password).await
}

/// Register a new account with the provider.
///
/// # Errors
///
/// A display-ready message when the provider is unreachable or refuses the
/// registration (weak password, duplicate account).
pub async fn sign_up(email: &str, password: &str) -> Result<AuthUser, String> {
    credential_call("register", email, password).await
}

/// Sign in through the provider's federated Google flow.
///
/// # Errors
///
/// A display-ready message when the provider is unreachable or the popup
/// flow is cancelled.
pub async fn sign_in_with_google() -> Result<AuthUser, String> {
    let resp = gloo_net::http::Request::post(&format!("{AUTH_BASE}/google"))
        .send()
        .await
        .map_err(|err| err.to_string())?;
    parse_user(resp).await
}

/// Fetch the provider's current session, if any. This is the "current user
/// changed" notification surface: the app calls it on startup and after
/// any sign-in/sign-out completes.
pub async fn fetch_current_user() -> Option<AuthUser> {
    let resp = gloo_net::http::Request::get(&format!("{AUTH_BASE}/me")).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<AuthUser>().await.ok()
}

/// End the provider session. Best-effort; a failed call leaves the session
/// to expire on its own.
pub async fn sign_out() {
    let _ = gloo_net::http::Request::post(&format!("{AUTH_BASE}/logout")).send().await;
}

async fn credential_call(path: &str, email: &str, password: &str) -> Result<AuthUser, String> {
    let body = serde_json::json!({ "email": email, "password": password });
    let resp = gloo_net::http::Request::post(&format!("{AUTH_BASE}/{path}"))
        .json(&body)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    parse_user(resp).await
}

async fn parse_user(resp: gloo_net::http::Response) -> Result<AuthUser, String> {
    if !resp.ok() {
        // The provider sends a human-readable reason in the body; fall back
        // to the status line when it doesn't.
        let reason = resp.text().await.unwrap_or_default();
        if reason.is_empty() {
            return Err(format!("request failed: {}", resp.status()));
        }
        return Err(reason);
    }
    resp.json::<AuthUser>().await.map_err(|err| err.to_string())
}
