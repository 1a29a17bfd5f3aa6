//! Scripted fakes shared by the unit tests in this crate.

use crate::driver::{PageDriver, PageElement, Selector};
use crate::session::BrowserSession;
use crate::verifier;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeState {
    // Remaining misses before a selector resolves. Zero means present.
    visible_after: HashMap<String, usize>,
    probe_counts: HashMap<String, usize>,
    ops: Vec<String>,
    fail_navigate: Option<String>,
    fail_find: HashMap<String, String>,
}

/// An in-memory page scripted per test: selectors appear on a schedule
/// and every interaction is recorded.
#[derive(Clone, Default)]
pub(crate) struct FakeDriver {
    state: Arc<Mutex<FakeState>>,
}

impl FakeDriver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A page whose login form is already rendered.
    pub(crate) fn with_login_form() -> Self {
        let driver = Self::new();
        driver.show(&verifier::username_field());
        driver.show(&verifier::password_field());
        driver.show(&verifier::submit_button());
        driver
    }

    /// Make `selector` resolve from now on.
    pub(crate) fn show(&self, selector: &Selector) {
        self.state
            .lock()
            .unwrap()
            .visible_after
            .insert(selector.to_string(), 0);
    }

    /// Make `selector` miss `misses` times, then resolve.
    pub(crate) fn show_after(&self, selector: &Selector, misses: usize) {
        self.state
            .lock()
            .unwrap()
            .visible_after
            .insert(selector.to_string(), misses);
    }

    pub(crate) fn fail_navigate(&self, detail: &str) {
        self.state.lock().unwrap().fail_navigate = Some(detail.to_string());
    }

    pub(crate) fn fail_find(&self, selector: &Selector, detail: &str) {
        self.state
            .lock()
            .unwrap()
            .fail_find
            .insert(selector.to_string(), detail.to_string());
    }

    /// How many times `selector` has been probed.
    pub(crate) fn probes(&self, selector: &Selector) -> usize {
        self.state
            .lock()
            .unwrap()
            .probe_counts
            .get(&selector.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Every navigation and element interaction, in order.
    pub(crate) fn ops(&self) -> Vec<String> {
        self.state.lock().unwrap().ops.clone()
    }
}

#[async_trait]
impl PageDriver for FakeDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(detail) = &state.fail_navigate {
            return Err(Error::Driver(detail.clone()));
        }
        state.ops.push(format!("navigate {url}"));
        Ok(())
    }

    async fn find(&self, selector: &Selector) -> Result<Option<Box<dyn PageElement>>> {
        let key = selector.to_string();
        let mut state = self.state.lock().unwrap();
        if let Some(detail) = state.fail_find.get(&key) {
            return Err(Error::Driver(detail.clone()));
        }
        *state.probe_counts.entry(key.clone()).or_insert(0) += 1;
        match state.visible_after.get_mut(&key) {
            Some(0) => Ok(Some(Box::new(FakeElement {
                key,
                state: Arc::clone(&self.state),
            }) as Box<dyn PageElement>)),
            Some(misses) => {
                *misses -= 1;
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

struct FakeElement {
    key: String,
    state: Arc<Mutex<FakeState>>,
}

impl FakeElement {
    fn record(&self, op: String) {
        self.state.lock().unwrap().ops.push(op);
    }
}

#[async_trait]
impl PageElement for FakeElement {
    async fn clear(&self) -> Result<()> {
        self.record(format!("clear {}", self.key));
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> Result<()> {
        self.record(format!("send_keys {} {text}", self.key));
        Ok(())
    }

    async fn click(&self) -> Result<()> {
        self.record(format!("click {}", self.key));
        Ok(())
    }
}

/// A session over a [`FakeDriver`] that counts shutdowns.
pub(crate) struct FakeSession {
    driver: FakeDriver,
    shutdowns: Arc<AtomicUsize>,
}

impl FakeSession {
    pub(crate) fn new(driver: FakeDriver) -> (Self, Arc<AtomicUsize>) {
        let shutdowns = Arc::new(AtomicUsize::new(0));
        let session = Self {
            driver,
            shutdowns: Arc::clone(&shutdowns),
        };
        (session, shutdowns)
    }
}

#[async_trait]
impl BrowserSession for FakeSession {
    fn driver(&self) -> &dyn PageDriver {
        &self.driver
    }

    async fn shutdown(self: Box<Self>) {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
    }
}
