use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use loginbox::config::ClientConfig;
use loginbox::telemetry;
use loginbox::ui::{render::render, LoginClient, LoginForm, UiState};

/// Terminal login form for the loginbox backend.
#[derive(Debug, Parser)]
#[command(name = "login-cli", version)]
struct Args {
    /// Backend base URL (defaults to API_URL or http://localhost:5102)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds (defaults to API_TIMEOUT_SECS or 10)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Run a single non-interactive attempt with this username
    #[arg(long)]
    username: Option<String>,

    /// Password for the non-interactive attempt
    #[arg(long, requires = "username")]
    password: Option<String>,
}

fn prompt(label: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("loginbox=warn");

    let args = Args::parse();
    let mut config = ClientConfig::from_env();
    if let Some(url) = args.api_url {
        config.api_url = url;
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }
    let client = LoginClient::new(&config)?;
    let mut form = LoginForm::new();

    if let Some(username) = args.username {
        form.set_username(username);
        form.set_password(args.password.unwrap_or_default());
        let state = form.submit(&client).await;
        let code = if state.user().is_some() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
        print!("{}", render(&form));
        return Ok(code);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", render(&form));
        if matches!(form.state(), UiState::Authenticated { .. }) {
            prompt("Çıkış yapmak için Enter, kapatmak için q: ")?;
            let Some(line) = lines.next_line().await? else { break };
            if line.trim() == "q" {
                break;
            }
            form.logout();
        } else {
            prompt("Kullanıcı Adı (boş bırakırsanız çıkar): ")?;
            let Some(username) = lines.next_line().await? else { break };
            if username.is_empty() {
                break;
            }
            prompt("Şifre: ")?;
            let Some(password) = lines.next_line().await? else { break };
            form.set_username(username);
            form.set_password(password);
            form.submit(&client).await;
        }
    }
    Ok(ExitCode::SUCCESS)
}
