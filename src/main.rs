use std::path::PathBuf;
use std::sync::Arc;

use campus_client::api::http::ReqwestTransport;
use campus_client::api::{ApiClient, ApiError, ApiResponse};
use campus_client::config::{ClientConfig, ConfigError, Timeouts};
use campus_client::events::AuthEvents;
use campus_client::router::{NavigationGuard, RouteTable};
use campus_client::session::SessionStore;
use campus_client::storage::{FileStore, StorageError};
use campus_client::types::message::{MessageFilter, MessageType};
use campus_client::types::ticket::GrabTicketRequest;
use campus_client::types::user::SmsPurpose;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("session file: {0}")]
    Storage(#[from] StorageError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("server rejected request (code {code}): {message}")]
    Rejected { code: i32, message: String },
}

#[derive(Parser, Debug)]
#[command(name = "campus", about = "Campus services API CLI")]
struct Cli {
    #[arg(long, env = "CAMPUS_API_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "CAMPUS_STATE_FILE", default_value = ".campus-session.json")]
    state_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with username and password.
    Login {
        username: String,
        #[arg(long, env = "CAMPUS_PASSWORD")]
        password: String,
    },
    /// Request a login code by SMS.
    SmsSend { phone: String },
    /// Log in with a phone number and SMS code.
    SmsLogin { phone: String, code: String },
    Logout,
    /// Show the stored session.
    Status,
    /// Print the permission list, fetching it if not loaded yet.
    Permissions,
    Profile,
    Tickets(TicketsCommand),
    Grade(GradeCommand),
    Messages(MessagesCommand),
    Campaigns(CampaignsCommand),
    Banners {
        #[arg(long)]
        position: Option<String>,
    },
    Rating(RatingCommand),
    /// Check whether the current session may open a screen.
    Route { path: String },
}

#[derive(Args, Debug)]
struct TicketsCommand {
    #[command(subcommand)]
    command: TicketsSubcommand,
}

#[derive(Subcommand, Debug)]
enum TicketsSubcommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = campus_client::api::ticket::DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    Show {
        activity_id: i64,
    },
    Grab {
        session_id: i64,
    },
    Mine,
}

#[derive(Args, Debug)]
struct GradeCommand {
    #[command(subcommand)]
    command: GradeSubcommand,
}

#[derive(Subcommand, Debug)]
enum GradeSubcommand {
    Status,
    Exams {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
    Exam {
        exam_id: i64,
    },
}

#[derive(Args, Debug)]
struct MessagesCommand {
    #[command(subcommand)]
    command: MessagesSubcommand,
}

#[derive(Subcommand, Debug)]
enum MessagesSubcommand {
    List {
        #[arg(long = "type")]
        kind: Option<MessageType>,
        #[arg(long, default_value_t = false)]
        unread: bool,
        #[arg(long)]
        page: Option<u32>,
    },
    Unread,
    Read {
        message_id: i64,
    },
    ReadAll {
        #[arg(long = "type")]
        kind: Option<MessageType>,
    },
}

#[derive(Args, Debug)]
struct CampaignsCommand {
    #[command(subcommand)]
    command: CampaignsSubcommand,
}

#[derive(Subcommand, Debug)]
enum CampaignsSubcommand {
    List,
    Show { campaign_id: i64 },
    Results { campaign_id: i64 },
}

#[derive(Args, Debug)]
struct RatingCommand {
    #[command(subcommand)]
    command: RatingSubcommand,
}

#[derive(Subcommand, Debug)]
enum RatingSubcommand {
    Schools,
    Search {
        keyword: String,
    },
    Hot {
        #[arg(long, default_value_t = 10)]
        count: u32,
    },
    Item {
        item_id: i64,
    },
    Rate {
        item_id: i64,
        stars: u8,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.base_url.as_deref() {
        Some(url) => ClientConfig::new(url, Timeouts::from_env())?,
        None => ClientConfig::from_env()?,
    };

    let transport = Arc::new(ReqwestTransport::new(&config)?);
    let storage = Arc::new(FileStore::open(&cli.state_file)?);
    let api = ApiClient::new(transport, storage, AuthEvents::new());
    let session = SessionStore::new(api);
    if let Some(fetch) = session.restore_session() {
        let _ = fetch.await;
    }

    let result = run(&session, cli.command).await;
    session.wait_for_permissions().await;
    result
}

async fn run(session: &SessionStore, command: Command) -> Result<(), CliError> {
    let api = session.api();
    match command {
        Command::Login { username, password } => {
            let response = session.login(&username, &password).await?;
            session.wait_for_permissions().await;
            print_data(response.map_data(|login| login.user))
        }
        Command::SmsSend { phone } => print_data(api.send_sms_code(&phone, SmsPurpose::Login).await?),
        Command::SmsLogin { phone, code } => {
            let response = session.sms_login(&phone, &code).await?;
            session.wait_for_permissions().await;
            print_data(response.map_data(|login| login.login.user))
        }
        Command::Logout => {
            session.logout();
            eprintln!("logged out");
            Ok(())
        }
        Command::Status => print_json(&json!({
            "loggedIn": session.is_logged_in(),
            "user": session.user(),
            "expiresAt": session.expires_at_ms(),
            "campusInfo": session.campus_info(),
            "permissions": session.permissions(),
        })),
        Command::Permissions => {
            session.fetch_permissions().await;
            print_json(&session.permissions())
        }
        Command::Profile => print_data(session.fetch_profile().await?),
        Command::Tickets(tickets) => run_tickets(api, tickets).await,
        Command::Grade(grade) => run_grade(api, grade).await,
        Command::Messages(messages) => run_messages(api, messages).await,
        Command::Campaigns(campaigns) => run_campaigns(api, campaigns).await,
        Command::Banners { position } => print_json(&api.banners(position.as_deref()).await?),
        Command::Rating(rating) => run_rating(api, rating).await,
        Command::Route { path } => run_route(session, &path),
    }
}

async fn run_tickets(api: &ApiClient, tickets: TicketsCommand) -> Result<(), CliError> {
    match tickets.command {
        TicketsSubcommand::List { page, page_size } => print_data(api.ticket_activities(page, page_size).await?),
        TicketsSubcommand::Show { activity_id } => print_data(api.ticket_activity(activity_id).await?),
        TicketsSubcommand::Grab { session_id } => {
            let req = GrabTicketRequest { session_id, user_info: None };
            print_data(api.grab_ticket(&req).await?)
        }
        TicketsSubcommand::Mine => print_data(api.my_tickets().await?),
    }
}

async fn run_grade(api: &ApiClient, grade: GradeCommand) -> Result<(), CliError> {
    match grade.command {
        GradeSubcommand::Status => print_data(api.grade_binding().await?),
        GradeSubcommand::Exams { page, page_size } => print_data(api.exams(page, page_size).await?),
        GradeSubcommand::Exam { exam_id } => print_data(api.exam(exam_id).await?),
    }
}

async fn run_messages(api: &ApiClient, messages: MessagesCommand) -> Result<(), CliError> {
    match messages.command {
        MessagesSubcommand::List { kind, unread, page } => {
            let filter = MessageFilter { kind, is_read: unread.then_some(false), page, size: None };
            print_data(api.messages(filter).await?)
        }
        MessagesSubcommand::Unread => print_data(api.unread_counts().await?),
        MessagesSubcommand::Read { message_id } => {
            let response = api.mark_message_read(message_id).await?;
            ensure_success(response.code, &response.message)?;
            eprintln!("marked {message_id} read");
            Ok(())
        }
        MessagesSubcommand::ReadAll { kind } => print_data(api.mark_all_messages_read(kind).await?),
    }
}

async fn run_campaigns(api: &ApiClient, campaigns: CampaignsCommand) -> Result<(), CliError> {
    match campaigns.command {
        CampaignsSubcommand::List => print_data(api.campaigns().await?),
        CampaignsSubcommand::Show { campaign_id } => print_data(api.campaign(campaign_id).await?),
        CampaignsSubcommand::Results { campaign_id } => print_data(api.voting_results(campaign_id).await?),
    }
}

async fn run_rating(api: &ApiClient, rating: RatingCommand) -> Result<(), CliError> {
    match rating.command {
        RatingSubcommand::Schools => print_data(api.schools().await?),
        RatingSubcommand::Search { keyword } => print_data(api.search_items(&keyword).await?),
        RatingSubcommand::Hot { count } => print_data(api.hot_items(count).await?),
        RatingSubcommand::Item { item_id } => print_data(api.rating_item(item_id).await?),
        RatingSubcommand::Rate { item_id, stars } => print_data(api.rate_item(item_id, stars).await?),
    }
}

fn run_route(session: &SessionStore, path: &str) -> Result<(), CliError> {
    let guard = NavigationGuard::new(Arc::new(RouteTable::campus()), session.clone());
    let decision = guard.before_each(path);
    let crumbs: Vec<&str> = guard
        .routes()
        .resolve(path)
        .map(|m| {
            guard
                .routes()
                .breadcrumbs(&m.route.name)
                .into_iter()
                .map(|r| r.title.as_str())
                .collect()
        })
        .unwrap_or_default();
    print_json(&json!({
        "decision": format!("{decision:?}"),
        "breadcrumbs": crumbs,
        "redirect": session.consume_redirect_route(),
    }))
}

fn ensure_success(code: i32, message: &str) -> Result<(), CliError> {
    if code == campus_client::api::SUCCESS_CODE {
        Ok(())
    } else {
        Err(CliError::Rejected { code, message: message.to_owned() })
    }
}

fn print_data<T: Serialize>(response: ApiResponse<T>) -> Result<(), CliError> {
    ensure_success(response.code, &response.message)?;
    print_json(&response.data)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
