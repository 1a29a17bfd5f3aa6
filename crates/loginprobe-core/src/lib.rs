pub mod credentials;
pub mod driver;
pub mod error;
pub mod outcome;
pub mod session;
pub mod verifier;
pub mod wait;

#[cfg(test)]
pub(crate) mod testutil;

pub use credentials::{Credentials, PASSWORD_VAR, USERNAME_VAR};
pub use driver::{PageDriver, PageElement, Selector};
pub use error::{Error, Result};
pub use outcome::{LoginOutcome, WaitPhase};
pub use session::{BrowserSession, run_check};
pub use verifier::LOGIN_URL;
