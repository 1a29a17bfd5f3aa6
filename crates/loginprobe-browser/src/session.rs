use crate::chrome_finder::ChromeFinder;
use crate::page::ChromePage;
use crate::profile::ProfileDir;
use crate::{Error, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use loginprobe_core::{BrowserSession, PageDriver};
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Bound on page loads and other CDP round-trips.
pub const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// A headless Chrome process scoped to one login check.
///
/// Launch opens a blank tab; `shutdown` closes the browser, reaps the
/// process, and removes a temporary profile.
#[derive(Debug)]
pub struct ChromeSession {
    driver: ChromePage,
    browser: Browser,
    handler_task: JoinHandle<()>,
    profile: ProfileDir,
}

impl ChromeSession {
    /// Launch headless Chrome and open a blank tab.
    pub async fn launch(
        chrome_path: Option<PathBuf>,
        profile_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let chrome = ChromeFinder::new(chrome_path).find()?;
        tracing::debug!("Using browser binary: {}", chrome.display());

        let profile = match profile_dir {
            Some(path) => ProfileDir::persistent(path)?,
            None => ProfileDir::temporary()?,
        };

        let config = BrowserConfig::builder()
            .chrome_executable(&chrome)
            .no_sandbox()
            .arg("--disable-dev-shm-usage")
            .user_data_dir(profile.path())
            .request_timeout(PAGE_LOAD_TIMEOUT)
            .build()
            .map_err(Error::Browser)?;

        let (browser, mut handler) = Browser::launch(config).await?;

        // The handler stream must be drained for any CDP command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            driver: ChromePage::new(page),
            browser,
            handler_task,
            profile,
        })
    }
}

#[async_trait]
impl BrowserSession for ChromeSession {
    fn driver(&self) -> &dyn PageDriver {
        &self.driver
    }

    async fn shutdown(self: Box<Self>) {
        let ChromeSession {
            driver,
            mut browser,
            handler_task,
            profile,
        } = *self;
        drop(driver);

        if let Err(e) = browser.close().await {
            tracing::debug!("Browser close failed: {}", e);
        }
        // Bound the exit wait; a wedged browser is killed when it drops.
        match tokio::time::timeout(Duration::from_secs(5), browser.wait()).await {
            Ok(Err(e)) => tracing::debug!("Browser wait failed: {}", e),
            Err(_) => tracing::debug!("Browser did not exit within 5s"),
            _ => {}
        }
        handler_task.abort();

        // Dropping the profile removes a temporary user-data dir.
        drop(profile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_launch_rejects_missing_browser_binary() {
        let result =
            ChromeSession::launch(Some(PathBuf::from("/nonexistent/chrome")), None).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    // Full session tests require a Chrome install and live in the CLI
    // integration tests.
}
