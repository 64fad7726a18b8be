use thiserror::Error;

/// Errors returned by [`crate::SessionStore::authenticate`].
///
/// None of these are fatal: the login view shows the message and leaves the
/// form open for another attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No known identity matches the supplied address.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Address or secret was empty.
    #[error("Please enter your email and password")]
    MissingCredentials,
    /// The session is still loading (start-up or another sign-in).
    #[error("A sign-in attempt is already in progress")]
    LoginInFlight,
    /// A sign-out happened while the lookup was still running.
    #[error("Sign-in was cancelled")]
    Cancelled,
}
