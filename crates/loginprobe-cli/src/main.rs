use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

#[derive(Parser)]
#[command(name = "loginprobe")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for smoke-testing web login flows with headless Chrome",
    long_about = "Loginprobe drives a real browser through a login form and reports whether \
                  the credentials got past it. Credentials come from the LOGIN_USERNAME and \
                  LOGIN_PASSWORD environment variables; the exit code is 0 when the login \
                  succeeded and 1 otherwise."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the login check against the target site
    Check {
        /// Login page URL
        #[arg(long, env = "LOGIN_URL", default_value = loginprobe_core::LOGIN_URL)]
        url: String,

        /// Path to the Chrome binary
        #[arg(long, value_name = "PATH")]
        chrome_path: Option<PathBuf>,

        /// Reuse a persistent browser profile directory instead of a
        /// temporary one
        #[arg(long, value_name = "DIR")]
        profile: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    #[command(long_about = "Generate shell completion scripts for loginprobe.

SUPPORTED SHELLS:
    bash, zsh, fish, powershell, elvish

INSTALLATION:
    Bash:  loginprobe completion --shell bash >> ~/.bashrc
    Zsh:   loginprobe completion --shell zsh >> ~/.zshrc
    Fish:  loginprobe completion --shell fish > ~/.config/fish/completions/loginprobe.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Execute the command
    let result = match cli.command {
        Commands::Check {
            url,
            chrome_path,
            profile,
        } => commands::check::execute(&url, chrome_path, profile)
            .map(|outcome| outcome.succeeded()),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            commands::completion::execute(shell, &mut cmd).map(|()| true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("loginprobe=debug,loginprobe_core=debug,loginprobe_browser=debug")
    } else {
        EnvFilter::new("loginprobe=info,loginprobe_core=info,loginprobe_browser=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
