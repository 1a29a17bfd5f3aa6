use crate::Error;
use async_trait::async_trait;
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use loginprobe_core::{PageDriver, PageElement, Selector};

/// One Chrome tab exposed through the page-driver traits.
#[derive(Debug)]
pub(crate) struct ChromePage {
    page: Page,
}

impl ChromePage {
    pub(crate) fn new(page: Page) -> Self {
        Self { page }
    }

    /// Ask the page whether `selector` currently matches anything.
    async fn is_present(&self, selector: &Selector) -> crate::Result<bool> {
        self.page
            .evaluate(probe_script(selector))
            .await?
            .into_value::<bool>()
            .map_err(|e| Error::Cdp(e.to_string()))
    }
}

#[async_trait]
impl PageDriver for ChromePage {
    async fn navigate(&self, url: &str) -> loginprobe_core::Result<()> {
        self.page.goto(url).await.map_err(Error::from)?;
        self.page.wait_for_navigation().await.map_err(Error::from)?;
        Ok(())
    }

    async fn find(
        &self,
        selector: &Selector,
    ) -> loginprobe_core::Result<Option<Box<dyn PageElement>>> {
        if self.is_present(selector).await? {
            Ok(Some(Box::new(ChromeElement {
                page: self.page.clone(),
                selector: selector.clone(),
            }) as Box<dyn PageElement>))
        } else {
            Ok(None)
        }
    }
}

/// A handle that re-resolves its selector on every interaction, so it
/// always targets the node currently in the DOM.
struct ChromeElement {
    page: Page,
    selector: Selector,
}

impl ChromeElement {
    async fn resolve(&self) -> crate::Result<Element> {
        let element = match &self.selector {
            Selector::Name(name) => self.page.find_element(attr_pattern(name)).await?,
            Selector::Css(css) => self.page.find_element(css.as_str()).await?,
            Selector::XPath(expr) => self.page.find_xpath(expr.as_str()).await?,
        };
        Ok(element)
    }
}

#[async_trait]
impl PageElement for ChromeElement {
    async fn clear(&self) -> loginprobe_core::Result<()> {
        let element = self.resolve().await?;
        element
            .call_js_fn("function() { this.value = ''; }", false)
            .await
            .map_err(Error::from)?;
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> loginprobe_core::Result<()> {
        let element = self.resolve().await?;
        element.focus().await.map_err(Error::from)?;
        element.type_str(text).await.map_err(Error::from)?;
        Ok(())
    }

    async fn click(&self) -> loginprobe_core::Result<()> {
        let element = self.resolve().await?;
        element.click().await.map_err(Error::from)?;
        Ok(())
    }
}

/// JS expression that is true when `selector` matches an element.
fn probe_script(selector: &Selector) -> String {
    match selector {
        Selector::Name(name) => css_probe(&attr_pattern(name)),
        Selector::Css(css) => css_probe(css),
        Selector::XPath(expr) => format!(
            "document.evaluate({}, document, null, \
             XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue !== null",
            js_string(expr)
        ),
    }
}

fn css_probe(pattern: &str) -> String {
    format!("document.querySelector({}) !== null", js_string(pattern))
}

fn attr_pattern(name: &str) -> String {
    format!("[name={}]", js_string(name))
}

// JSON string literals are valid JS string literals.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
