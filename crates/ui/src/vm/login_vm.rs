use lernplan_core::model::UserId;
use services::{AuthOutcome, CredentialService};

pub const INVALID_CREDENTIALS: &str = "Invalid Username or Password.";
const LOGIN_UNAVAILABLE: &str = "Login is unavailable right now. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginResult {
    LoggedIn(UserId),
    Rejected(&'static str),
}

/// Check the form input. Never reveals whether the username exists.
pub async fn submit_login(
    credentials: &CredentialService,
    username: &str,
    password: &str,
) -> LoginResult {
    match credentials.authenticate(username, password).await {
        Ok(AuthOutcome::Authenticated(user)) => LoginResult::LoggedIn(user),
        Ok(AuthOutcome::InvalidCredentials) => LoginResult::Rejected(INVALID_CREDENTIALS),
        Err(err) => {
            tracing::error!(error = %err, "credential lookup failed");
            LoginResult::Rejected(LOGIN_UNAVAILABLE)
        }
    }
}
