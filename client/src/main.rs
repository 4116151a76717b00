//! `alignerr` command-line client.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use client::api::{self, SignupForm};
use client::session::FileStorage;
use client::transport::UploadFile;
use client::views::{HistoryPage, ReviewPanel, UploadPage, WalletPage};
use client::{ApiClient, ApiService, ClientConfig, Result, SessionContext, SessionEvent, TokenStore};
use shared::{format_amount, format_balance, RejectionReason, Transaction};

#[derive(Debug, Parser)]
#[command(name = "alignerr", about = "Alignerr marketplace client", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ALIGNERR_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and store the session.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "ALIGNERR_PASSWORD", hide_env_values = true)]
        password: String,
        /// Password confirmation. Defaults to `--password`.
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Forget the stored session.
    Logout,
    /// Show the logged-in user.
    Whoami,
    /// Show balance and recent transactions.
    Wallet,
    /// Request a withdrawal.
    Withdraw {
        amount: f64,
        #[arg(long = "upi")]
        upi_id: Option<String>,
        #[arg(long = "bank")]
        bank_account: Option<String>,
    },
    /// Show transaction history.
    History,
    /// Upload a file for review.
    Upload {
        path: PathBuf,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        tags: Option<String>,
    },
    /// Show upload statistics.
    Stats,
    /// List the moderation queue (admin).
    Pending,
    /// Approve an upload (admin).
    Approve {
        upload_id: i64,
        #[arg(long, default_value_t = client::views::review::DEFAULT_QUALITY_SCORE,
              value_parser = clap::value_parser!(u8).range(0..=100))]
        score: u8,
        #[arg(long, default_value = "")]
        comments: String,
    },
    /// Reject an upload (admin).
    Reject {
        upload_id: i64,
        /// One of: low_quality, copyrighted, inappropriate, corrupted,
        /// duplicate, wrong_category, other.
        #[arg(long)]
        reason: RejectionReason,
        #[arg(long, default_value = "")]
        comments: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _log_guard = client::debug::init_logger();

    match run(cli.command).await {
        Ok(session) => {
            report_events(&session);
            ExitCode::SUCCESS
        }
        Err((err, session)) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("Error: {}", err);
            if let Some(session) = session {
                report_events(&session);
            }
            ExitCode::FAILURE
        }
    }
}

type RunError = (client::AppError, Option<SessionContext>);

async fn run(command: Command) -> std::result::Result<SessionContext, RunError> {
    let config = ClientConfig::from_env().map_err(|e| (e, None))?;
    config.validate().map_err(|e| (e, None))?;

    let store = TokenStore::new(Arc::new(FileStorage::in_dir(&config.storage_dir)));
    let session = SessionContext::hydrate(store);
    let client = ApiClient::new(&config, session.clone()).map_err(|e| (e, None))?;

    tracing::info!(api_url = %client.base_url(), "Client ready");

    match execute(command, client).await {
        Ok(()) => Ok(session),
        Err(err) => Err((err, Some(session))),
    }
}

async fn execute(command: Command, client: ApiClient) -> Result<()> {
    let service: Arc<dyn ApiService> = Arc::new(client.clone());

    match command {
        Command::Login { email, password } => {
            let auth = api::auth::login(&client, &email, &password).await?;
            println!("Logged in as {}", auth.user.display_name());
        }
        Command::Signup {
            name,
            email,
            password,
            confirm,
        } => {
            let form = SignupForm {
                name,
                email,
                confirm_password: confirm.unwrap_or_else(|| password.clone()),
                password,
            };
            let auth = api::auth::signup(&client, &form).await?;
            println!("Welcome, {}", auth.user.display_name());
        }
        Command::Logout => {
            api::auth::logout(&client)?;
            println!("Logged out");
        }
        Command::Whoami => {
            let user = api::user::profile(&client).await?;
            println!("{} <{}> ({:?})", user.display_name(), user.email, user.role);
        }
        Command::Wallet => {
            let page = WalletPage::new(service);
            page.load().await?;
            let state = page.snapshot();
            println!("Balance:   {}", format_balance(state.summary.current_balance));
            println!("Earned:    {}", format_balance(state.summary.total_earned));
            println!("Withdrawn: {}", format_balance(state.summary.total_withdrawn));
            print_transactions(&state.transactions);
        }
        Command::Withdraw {
            amount,
            upi_id,
            bank_account,
        } => {
            let page = WalletPage::new(service);
            page.load().await?;
            page.withdraw(amount, upi_id, bank_account).await?;
            let state = page.snapshot();
            if let Some(notice) = state.notice {
                println!("{}", notice);
            }
            println!("Balance: {}", format_balance(state.summary.current_balance));
        }
        Command::History => {
            let page = HistoryPage::new(service);
            page.load().await?;
            let state = page.snapshot();
            if state.placeholder {
                println!("(history unavailable, showing sample data)");
            }
            print_transactions(&state.transactions);
        }
        Command::Upload {
            path,
            description,
            tags,
        } => {
            let page = UploadPage::new(service);
            page.load()?;
            page.select_file(UploadFile::from_path(&path).await?);
            page.set_description(description.unwrap_or_default());
            page.set_tags(tags.unwrap_or_default());
            let record = page.submit().await?;
            println!("Uploaded {} (id {})", record.file_name, record.id);
        }
        Command::Stats => {
            let stats = api::upload::stats(&client).await?;
            println!(
                "Uploads: {} (approved {}, pending {}, rejected {}), earned {}",
                stats.total_uploads,
                stats.approved,
                stats.pending,
                stats.rejected,
                format_balance(stats.total_earned)
            );
        }
        Command::Pending => {
            let panel = ReviewPanel::new(service);
            panel.load().await?;
            let state = panel.snapshot();
            if state.queue.is_empty() {
                println!("No uploads waiting for review");
            }
            for item in &state.queue {
                println!(
                    "{:>6}  {}  {}",
                    item.id,
                    item.file_name,
                    item.uploader.as_deref().unwrap_or("-")
                );
            }
        }
        Command::Approve {
            upload_id,
            score,
            comments,
        } => {
            let panel = load_with_selection(service, upload_id).await?;
            panel.set_quality_score(score);
            panel.set_comments(comments);
            panel.approve().await?;
            println!("Approved upload {}", upload_id);
        }
        Command::Reject {
            upload_id,
            reason,
            comments,
        } => {
            let panel = load_with_selection(service, upload_id).await?;
            panel.set_rejection_reason(Some(reason));
            panel.set_comments(comments);
            panel.reject().await?;
            println!("Rejected upload {} ({})", upload_id, reason.label());
        }
    }
    Ok(())
}

async fn load_with_selection(service: Arc<dyn ApiService>, upload_id: i64) -> Result<ReviewPanel> {
    let panel = ReviewPanel::new(service);
    panel.load().await?;
    if !panel.select(upload_id) {
        return Err(client::AppError::Validation(format!(
            "Upload {} is not in the review queue",
            upload_id
        )));
    }
    Ok(panel)
}

fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions yet");
        return;
    }
    for txn in transactions {
        println!(
            "{}  {:>12}  {:<10}  {}",
            txn.date,
            format_amount(txn.amount),
            format!("{:?}", txn.status).to_lowercase(),
            txn.description
        );
    }
}

fn report_events(session: &SessionContext) {
    let events = session.events();
    while let Ok(event) = events.try_recv() {
        if let SessionEvent::LoginRequired { reason } = event {
            eprintln!(
                "Session expired ({}). Run `alignerr login` to sign in again.",
                reason
            );
        }
    }
}
