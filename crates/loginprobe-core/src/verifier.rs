use crate::credentials::Credentials;
use crate::driver::{PageDriver, PageElement, Selector};
use crate::outcome::{LoginOutcome, WaitPhase};
use crate::wait;
use crate::{Error, Result};
use std::time::Duration;

/// Login page of the OrangeHRM demo instance.
pub const LOGIN_URL: &str = "https://opensource-demo.orangehrmlive.com/web/index.php/auth/login";

/// Bound on waiting for the login form to render.
pub const FORM_WAIT: Duration = Duration::from_secs(20);
/// Bound on waiting for a terminal marker after submitting.
pub const RESULT_WAIT: Duration = Duration::from_secs(20);

pub(crate) fn username_field() -> Selector {
    Selector::name("username")
}

pub(crate) fn password_field() -> Selector {
    Selector::name("password")
}

pub(crate) fn submit_button() -> Selector {
    Selector::xpath("//button[@type='submit']")
}

/// Success marker: the dashboard heading shown after a valid login.
pub(crate) fn dashboard_heading() -> Selector {
    Selector::xpath("//h6[text()='Dashboard']")
}

/// Failure marker: the alert shown for rejected credentials.
pub(crate) fn error_alert() -> Selector {
    Selector::xpath("//p[contains(@class, 'oxd-alert-content-text')]")
}

/// Drive one login attempt and report its outcome.
///
/// Timeouts and driver faults are converted to failure outcomes at this
/// boundary; no error leaves it. Each failure logs exactly one line
/// naming the cause.
pub async fn verify(
    driver: &dyn PageDriver,
    url: &str,
    credentials: &Credentials,
) -> LoginOutcome {
    match attempt(driver, url, credentials).await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!("Unexpected error during login: {err}");
            LoginOutcome::Error(err.to_string())
        }
    }
}

async fn attempt(
    driver: &dyn PageDriver,
    url: &str,
    credentials: &Credentials,
) -> Result<LoginOutcome> {
    tracing::debug!("Navigating to {url}");
    driver.navigate(url).await?;

    let username = username_field();
    if !wait::any_present(driver, &[&username], FORM_WAIT).await? {
        tracing::error!("Timed out waiting for the login form");
        return Ok(LoginOutcome::TimedOut(WaitPhase::Form));
    }

    let user_input = require(driver, &username).await?;
    let pass_input = require(driver, &password_field()).await?;
    let submit = require(driver, &submit_button()).await?;

    user_input.clear().await?;
    user_input.send_keys(&credentials.username).await?;
    pass_input.clear().await?;
    pass_input.send_keys(&credentials.password).await?;
    submit.click().await?;

    let dashboard = dashboard_heading();
    if !wait::any_present(driver, &[&dashboard, &error_alert()], RESULT_WAIT).await? {
        tracing::error!("Timed out waiting for a login result");
        return Ok(LoginOutcome::TimedOut(WaitPhase::Result));
    }

    // The dashboard wins whenever it made it onto the page, no matter
    // which marker satisfied the wait.
    if driver.find(&dashboard).await?.is_some() {
        tracing::info!("Login successful");
        Ok(LoginOutcome::Success)
    } else {
        tracing::error!("Login failed: dashboard not found. Check credentials.");
        Ok(LoginOutcome::Rejected)
    }
}

async fn require(driver: &dyn PageDriver, selector: &Selector) -> Result<Box<dyn PageElement>> {
    driver
        .find(selector)
        .await?
        .ok_or_else(|| Error::MissingElement(selector.to_string()))
}
