use crate::Result;
use crate::driver::{PageDriver, Selector};
use std::time::Duration;
use tokio::time::Instant;

/// How often the page is re-probed during a bounded wait.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Poll until any of `selectors` is present, bounded by `timeout`.
///
/// A single loop checks every selector each iteration, so conditions
/// racing each other (dashboard vs. alert) share one time budget. Every
/// selector is probed at least once even when the budget is already
/// spent. Returns `false` when the bound elapses first.
pub async fn any_present(
    driver: &dyn PageDriver,
    selectors: &[&Selector],
    timeout: Duration,
) -> Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        for selector in selectors {
            if driver.find(selector).await?.is_some() {
                return Ok(true);
            }
        }
        if Instant::now() >= deadline {
            return Ok(false);
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeDriver;

    #[tokio::test]
    async fn test_present_selector_is_found_immediately() {
        let driver = FakeDriver::new();
        let ready = Selector::css(".ready");
        driver.show(&ready);

        let found = any_present(&driver, &[&ready], Duration::from_secs(1))
            .await
            .unwrap();

        assert!(found);
        assert_eq!(driver.probes(&ready), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_until_selector_appears() {
        let driver = FakeDriver::new();
        let late = Selector::css(".late");
        driver.show_after(&late, 3);

        let found = any_present(&driver, &[&late], Duration::from_secs(5))
            .await
            .unwrap();

        assert!(found);
        assert_eq!(driver.probes(&late), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_when_the_bound_elapses() {
        let driver = FakeDriver::new();
        let never = Selector::css(".never");
        let started = Instant::now();

        let found = any_present(&driver, &[&never], Duration::from_secs(20))
            .await
            .unwrap();

        assert!(!found);
        assert!(started.elapsed() >= Duration::from_secs(20));
    }

    #[tokio::test]
    async fn test_every_selector_is_probed_even_with_zero_budget() {
        let driver = FakeDriver::new();
        let first = Selector::css(".first");
        let second = Selector::css(".second");

        let found = any_present(&driver, &[&first, &second], Duration::ZERO)
            .await
            .unwrap();

        assert!(!found);
        assert_eq!(driver.probes(&first), 1);
        assert_eq!(driver.probes(&second), 1);
    }

    #[tokio::test]
    async fn test_either_selector_satisfies_the_wait() {
        let driver = FakeDriver::new();
        let missing = Selector::css(".missing");
        let shown = Selector::css(".shown");
        driver.show(&shown);

        let found = any_present(&driver, &[&missing, &shown], Duration::from_secs(1))
            .await
            .unwrap();

        assert!(found);
    }

    #[tokio::test]
    async fn test_driver_fault_propagates() {
        let driver = FakeDriver::new();
        let broken = Selector::css(".broken");
        driver.fail_find(&broken, "websocket closed");

        let result = any_present(&driver, &[&broken], Duration::from_secs(1)).await;

        assert!(result.is_err());
    }
}
