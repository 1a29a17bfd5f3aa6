use crate::credentials::Credentials;
use crate::driver::PageDriver;
use crate::outcome::LoginOutcome;
use crate::verifier;
use async_trait::async_trait;

/// A live browser scoped to one login check.
///
/// `shutdown` consumes the session, so a caller can release the browser
/// at most once and the compiler rejects any use after it.
#[async_trait]
pub trait BrowserSession: Send {
    /// The page driver backed by this session's browser.
    fn driver(&self) -> &dyn PageDriver;

    /// Release the browser and everything it holds.
    async fn shutdown(self: Box<Self>);
}

/// Run one login check over `session`, then release it.
///
/// The session is shut down on every path out of the check, including
/// timeouts and driver faults.
pub async fn run_check(
    session: Box<dyn BrowserSession>,
    url: &str,
    credentials: &Credentials,
) -> LoginOutcome {
    let outcome = verifier::verify(session.driver(), url, credentials).await;
    session.shutdown().await;
    outcome
}
