use crate::Result;
use async_trait::async_trait;
use std::fmt;

/// How to locate an element on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// By form-control `name` attribute.
    Name(String),
    /// By CSS selector.
    Css(String),
    /// By XPath expression.
    XPath(String),
}

impl Selector {
    pub fn name(value: impl Into<String>) -> Self {
        Self::Name(value.into())
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::Css(value.into())
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::XPath(value.into())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Name(name) => write!(f, "[name={name}]"),
            Selector::Css(css) => write!(f, "{css}"),
            Selector::XPath(xpath) => write!(f, "{xpath}"),
        }
    }
}

/// A located element the verifier can interact with.
#[async_trait]
pub trait PageElement: Send + Sync {
    /// Empty the element's current value.
    async fn clear(&self) -> Result<()>;

    /// Type text into the element.
    async fn send_keys(&self, text: &str) -> Result<()>;

    /// Click the element.
    async fn click(&self) -> Result<()>;
}

/// The browser capability surface the login verifier drives.
///
/// Implementations back this with a real browser; tests substitute a
/// scripted fake. `find` distinguishes "not present" (`Ok(None)`) from a
/// driver fault (`Err`), and the verifier treats the two differently.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to `url` and wait for the page load to settle.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Look up the first element matching `selector`.
    async fn find(&self, selector: &Selector) -> Result<Option<Box<dyn PageElement>>>;
}
