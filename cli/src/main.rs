mod store;
mod terminal;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use portal::config::{ConfigError, PortalConfig};
use portal::error::ErrorCode;
use portal::net::client::RetryingClient;
use portal::net::transport::{ReqwestTransport, TokioSleeper};
use portal::pages::Page;
use portal::pages::dashboard::{DashboardOutcome, initialize_dashboard};
use portal::pages::form::SubmitError;
use portal::pages::login::LoginController;
use portal::pages::logout::logout;
use portal::pages::signup::SignupController;
use portal::state::session::{SessionStore, StorageError};
use portal::util::greeting::LocalClock;
use portal::util::validate::Credentials;

use store::FileStore;
use terminal::{TerminalDashboard, TerminalForm, TerminalNavigator};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{} ({})", .0, .0.error_code())]
    Submit(#[from] SubmitError),
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("not logged in; run `portal-cli login` first")]
    NotLoggedIn,
}

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "Signup, login and dashboard flow from the terminal")]
struct Cli {
    /// Endpoint receiving every action. Defaults to `PORTAL_API_URL` or the built-in URL.
    #[arg(long)]
    api_url: Option<String>,

    #[arg(long)]
    max_retries: Option<u32>,

    #[arg(long)]
    retry_base_ms: Option<u64>,

    /// File holding the session record between invocations.
    #[arg(long, env = "PORTAL_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account, then point at the login step.
    Signup(SignupArgs),
    /// Log in and store the session.
    Login(LoginArgs),
    /// Clear the stored session.
    Logout,
    /// Print the greeting for the stored user.
    Dashboard,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true, default_value = "")]
    password: String,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true, default_value = "")]
    password: String,
}

impl Cli {
    fn config(&self) -> Result<PortalConfig, CliError> {
        let mut config = PortalConfig::from_env()?;
        if let Some(url) = &self.api_url {
            if url.trim().is_empty() {
                return Err(ConfigError::EmptyUrl { var: "--api-url" }.into());
            }
            config.api_url = url.trim().to_owned();
        }
        if let Some(max_retries) = self.max_retries {
            config.max_retries = max_retries;
        }
        if let Some(retry_base_ms) = self.retry_base_ms {
            config.retry_base_ms = retry_base_ms;
        }
        Ok(config)
    }

    fn session_path(&self) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("portal-session.json"))
    }
}

type CliClient = RetryingClient<ReqwestTransport, TokioSleeper>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let session = SessionStore::new(FileStore::new(cli.session_path()));
    let navigator = TerminalNavigator::default();

    match &cli.command {
        Command::Signup(args) => {
            let client = build_client(&cli)?;
            let form = TerminalForm::new(
                Page::Signup,
                Credentials { name: Some(args.name.clone()), email: args.email.clone(), password: args.password.clone() },
            );
            SignupController::new(&client).submit(&form, &navigator).await?;
        }
        Command::Login(args) => {
            let client = build_client(&cli)?;
            let form = TerminalForm::new(
                Page::Login,
                Credentials { name: None, email: args.email.clone(), password: args.password.clone() },
            );
            LoginController::new(&client, &session).submit(&form, &navigator).await?;
            if navigator.last() == Some(Page::Dashboard) {
                initialize_dashboard(&session, &TerminalDashboard, &navigator, &LocalClock);
            }
        }
        Command::Logout => {
            logout(&session, &navigator)?;
            tracing::info!(file = %session.backend().path().display(), "logged out");
        }
        Command::Dashboard => {
            if initialize_dashboard(&session, &TerminalDashboard, &navigator, &LocalClock) == DashboardOutcome::Redirected {
                return Err(CliError::NotLoggedIn);
            }
        }
    }
    Ok(())
}

fn build_client(cli: &Cli) -> Result<CliClient, CliError> {
    let config = cli.config()?;
    tracing::debug!(endpoint = %config.api_url, max_retries = config.max_retries, "client configured");
    Ok(RetryingClient::from_config(ReqwestTransport::new()?, TokioSleeper, &config))
}
