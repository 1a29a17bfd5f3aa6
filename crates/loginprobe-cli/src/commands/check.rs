use anyhow::{Context, Result};
use console::style;
use loginprobe_browser::ChromeSession;
use loginprobe_core::{Credentials, LoginOutcome, run_check};
use std::path::PathBuf;
use url::Url;

pub fn execute(
    url: &str,
    chrome_path: Option<PathBuf>,
    profile: Option<PathBuf>,
) -> Result<LoginOutcome> {
    // Fail before any browser is launched
    let credentials = Credentials::from_env()?;
    let target = Url::parse(url).with_context(|| format!("Invalid login URL: {url}"))?;

    // Create tokio runtime for async operations
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        println!("🌐 Launching headless Chrome...");
        let session = ChromeSession::launch(chrome_path, profile).await?;

        println!("🔐 Checking login at: {target}");
        let outcome = run_check(Box::new(session), target.as_str(), &credentials).await;

        Ok::<_, anyhow::Error>(outcome)
    });

    // Bound runtime shutdown; browser tasks may still be parked on I/O
    runtime.shutdown_timeout(std::time::Duration::from_millis(100));

    let outcome = result?;

    match &outcome {
        LoginOutcome::Success => {
            println!("\n{}", style("✅ Login check passed").green().bold());
        }
        other => {
            println!(
                "\n{}",
                style(format!("❌ Login check failed: {other}")).red().bold()
            );
        }
    }

    Ok(outcome)
}
