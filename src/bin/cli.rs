//! Study Desk CLI
//!
//! Terminal client for the learning platform:
//! - Sign in as a learner or administrator
//! - Show dashboards and the activity monitor
//! - Read the bundled study material
//! - Manage user accounts

use anyhow::{anyhow, bail, Context};
use chrono::Local;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use studydesk::api::{
    endpoint::DEFAULT_STATS_PERIOD, ApiClient, ApiError, EntityId, ReqwestTransport,
};
use studydesk::config::{generate_default_config, Config};
use studydesk::content;
use studydesk::dashboard::{
    self, ActivityFeed, ActivityFilter, ActivityQuery, ActivitySummary, EventTone, StatCard,
    TimeWindow, UserAction, UserRow,
};
use studydesk::routing::{AuthFlags, Navigator, Page};
use studydesk::session::{AdminRealm, FileTokenStorage, Realm, UserRealm};
use studydesk::{AdminSessionStore, UserSessionStore};

#[derive(Parser)]
#[command(name = "studydesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the Study Desk learning platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in as a learner
    Login {
        email: String,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create a learner account and sign in
    Register {
        name: String,
        email: String,
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign out of the learner session
    Logout,

    /// Show both sessions
    Whoami,

    /// Show the learner dashboard
    Dashboard,

    /// Browse study material
    Study {
        /// Technology id (python, sql, ...); lists the catalogue when omitted
        topic: Option<String>,
        /// Show only this section (1-based)
        #[arg(short, long)]
        section: Option<usize>,
    },

    /// Resolve which page would be shown for a requested page
    Route {
        /// login, register, admin-login, admin or dashboard
        page: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Administrator commands
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Sign in as an administrator
    Login {
        email: String,
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign out of the admin session
    Logout,

    /// Show the admin overview
    Dashboard,

    /// Show the activity monitor
    Activities {
        /// all, login, posts, profile or security
        #[arg(long, default_value = "all")]
        filter: ActivityFilter,
        /// 1h, 24h, 7d, 30d or all
        #[arg(long, default_value = "24h")]
        window: TimeWindow,
    },

    /// List user accounts
    Users {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },

    /// Show one account
    User { id: String },

    /// Reactivate an account
    Activate { id: String },

    /// Deactivate an account
    Deactivate { id: String },

    /// Delete an account
    DeleteUser {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show system statistics
    Stats {
        /// Period for growth and engagement figures
        #[arg(long, default_value = DEFAULT_STATS_PERIOD)]
        period: String,
    },

    /// Show system health
    Health,

    /// Send a notification to every user
    Broadcast {
        message: String,
        #[arg(long)]
        title: Option<String>,
    },
}

type Transport = ReqwestTransport;

/// Everything a command needs
struct App {
    api: Rc<ApiClient<Transport>>,
    user: UserSessionStore<Transport, FileTokenStorage>,
    admin: AdminSessionStore<Transport, FileTokenStorage>,
    json: bool,
}

impl App {
    fn new(api_url: Option<String>, format: &str, config: &Config) -> anyhow::Result<Self> {
        let base_url = api_url.unwrap_or_else(|| config.api.base_url.clone());
        let transport = ReqwestTransport::new(config.api.request_timeout())?;
        let api = Rc::new(ApiClient::new(transport, base_url));
        let tokens = FileTokenStorage::new(config.storage.token_path());

        tracing::debug!(api = api.base_url(), tokens = ?tokens.dir(), "client ready");

        Ok(Self {
            user: UserSessionStore::new(Rc::clone(&api), tokens.clone()),
            admin: AdminSessionStore::new(Rc::clone(&api), tokens),
            api,
            json: format == "json",
        })
    }

    async fn require_user(&self) -> anyhow::Result<String> {
        if !self.user.restore().await {
            bail!("Not signed in. Run `studydesk login <email>` first");
        }
        self.user.require_token().map_err(api_error)
    }

    async fn require_admin(&self) -> anyhow::Result<String> {
        if !self.admin.restore().await {
            bail!("Not signed in as admin. Run `studydesk admin login <email>` first");
        }
        self.admin.require_token().map_err(api_error)
    }

    fn emit<T: Serialize>(&self, value: &T, table: impl FnOnce()) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            table();
        }
        Ok(())
    }
}

fn api_error(err: ApiError) -> anyhow::Error {
    anyhow!(err.user_message())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;
    studydesk::logging::init(&config.logging);

    if let Commands::Config { output } = &cli.command {
        return write_config(output.as_ref());
    }

    let app = App::new(cli.api_url, &cli.format, &config)?;
    run(&app, cli.command).await
}

async fn run(app: &App, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login { email, password } => {
            let password = password_or_prompt(password)?;
            let identity = app.user.login(&email, &password).await.map_err(api_error)?;
            println!("Signed in as {}", UserRealm::display_name(&identity));
        }

        Commands::Register {
            name,
            email,
            password,
        } => {
            let password = password_or_prompt(password)?;
            let identity = app
                .user
                .register(&name, &email, &password)
                .await
                .map_err(api_error)?;
            println!("Welcome, {}", UserRealm::display_name(&identity));
        }

        Commands::Logout => {
            app.user.logout();
            println!("Signed out");
        }

        Commands::Whoami => {
            app.user.restore().await;
            app.admin.restore().await;
            let user = app.user.identity();
            let admin = app.admin.identity();

            app.emit(&json!({ "user": user, "admin": admin }), || {
                match &user {
                    Some(u) => println!("User:  {} <{}>", UserRealm::display_name(u), u.email),
                    None => println!("User:  not signed in"),
                }
                match &admin {
                    Some(a) => println!("Admin: {} <{}>", AdminRealm::display_name(a), a.email),
                    None => println!("Admin: not signed in"),
                }
            })?;
        }

        Commands::Dashboard => {
            let token = app.require_user().await?;
            let data = app.api.user_dashboard(&token).await.map_err(|e| {
                anyhow!(dashboard::fetch_error(&e, dashboard::DASHBOARD_FETCH_FAILED))
            })?;

            app.emit(&data, || {
                println!("Learning Dashboard");
                if let Some(message) = &data.message {
                    println!("{}", message);
                }
                println!("{}", dashboard::identity_banner(&data));
                if let Some(cards) = dashboard::progress_cards(&data) {
                    println!();
                    print_cards(&cards);
                }
            })?;
        }

        Commands::Study { topic, section } => study(app, topic.as_deref(), section)?,

        Commands::Route { page } => {
            let requested: Page = page.parse()?;
            app.user.restore().await;
            app.admin.restore().await;
            let flags = AuthFlags::new(app.user.is_authenticated(), app.admin.is_authenticated());

            let mut nav = Navigator::new(requested);
            let view = nav.view(flags);
            let resolved = nav.page();

            app.emit(
                &json!({
                    "requested": requested.as_str(),
                    "resolved": resolved.as_str(),
                    "view": format!("{:?}", view),
                }),
                || println!("{} -> {} ({:?})", requested, resolved, view),
            )?;
        }

        Commands::Config { output } => write_config(output.as_ref())?,

        Commands::Admin { command } => admin(app, command).await?,
    }

    Ok(())
}

async fn admin(app: &App, command: AdminCommands) -> anyhow::Result<()> {
    match command {
        AdminCommands::Login { email, password } => {
            let password = password_or_prompt(password)?;
            let identity = app.admin.login(&email, &password).await.map_err(api_error)?;
            println!("Signed in as admin {}", AdminRealm::display_name(&identity));
        }

        AdminCommands::Logout => {
            // Same effect as "Back to Login" in the browser
            let mut nav = Navigator::new(Page::Admin);
            let signed_in = app.admin.token().is_some();
            nav.back_to_login(signed_in, || app.admin.logout());
            println!("Signed out of admin session");
        }

        AdminCommands::Dashboard => {
            let token = app.require_admin().await?;
            let data = app.api.admin_dashboard(&token).await.map_err(|e| {
                anyhow!(dashboard::fetch_error(&e, dashboard::DASHBOARD_FETCH_FAILED))
            })?;

            app.emit(&data, || {
                if let Some(admin) = app.admin.identity() {
                    println!("Admin: {}", AdminRealm::display_name(&admin));
                }
                print_cards(&dashboard::admin_overview(&data));
                println!();
                println!("Recent System Activity");
                if data.recent_system_activity.is_empty() {
                    println!("  {}", dashboard::NO_RECENT_ACTIVITY);
                }
                for event in &data.recent_system_activity {
                    let marker = match EventTone::of(event) {
                        EventTone::Signup => "+",
                        EventTone::Login => ">",
                        EventTone::Neutral => "-",
                    };
                    println!("  {} {:<50} {}", marker, event.description, event.time);
                }
            })?;
        }

        AdminCommands::Activities { filter, window } => {
            let token = app.require_admin().await?;
            let query = ActivityQuery::new(filter, window);
            let list = app.api.activities(&token, &query).await.map_err(|e| {
                anyhow!(dashboard::fetch_error(&e, dashboard::ACTIVITIES_FETCH_FAILED))
            })?;

            app.emit(&list, || {
                let summary = ActivitySummary::compute(&list.activities, Local::now().date_naive());
                println!("User Activity ({}, {})", filter.label(), window.label());
                println!(
                    "Today's logins: {}  Posts created: {}  Page views: {}  Active users: {}",
                    summary.logins_today,
                    summary.posts_created,
                    summary.page_views,
                    summary.active_users
                );
                println!();
                print_feed(&ActivityFeed::build(&list.activities));
            })?;
        }

        AdminCommands::Users { search, page } => {
            let token = app.require_admin().await?;
            let mut params = Vec::new();
            if let Some(search) = search {
                params.push(("search".to_string(), search));
            }
            if let Some(page) = page {
                params.push(("page".to_string(), page.to_string()));
            }
            let list = app.api.users(&token, params).await.map_err(api_error)?;

            app.emit(&list, || {
                if list.users.is_empty() {
                    println!("No users found.");
                    return;
                }
                println!(
                    "{:<8} {:<20} {:<28} {:<9} {:<11} {}",
                    "ID", "Name", "Email", "Status", "Joined", "Last login"
                );
                println!("{}", "-".repeat(100));
                for user in &list.users {
                    let row = UserRow::from_user(user);
                    println!(
                        "{:<8} {:<20} {:<28} {:<9} {:<11} {}",
                        row.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
                        row.name,
                        row.email,
                        row.status,
                        row.joined,
                        row.last_login
                    );
                }
                if let Some(total) = list.total {
                    println!();
                    println!("{} of {} users", list.users.len(), total);
                }
            })?;
        }

        AdminCommands::User { id } => {
            let token = app.require_admin().await?;
            let user = app
                .api
                .user(&token, &EntityId::from(id.as_str()))
                .await
                .map_err(api_error)?;

            app.emit(&user, || {
                let row = UserRow::from_user(&user);
                println!("Name:       {}", row.name);
                println!("Email:      {}", row.email);
                println!("Status:     {}", row.status);
                println!("Joined:     {}", row.joined);
                println!("Last login: {}", row.last_login);
            })?;
        }

        AdminCommands::Activate { id } => {
            user_action(app, &id, UserAction::Activate).await?;
        }

        AdminCommands::Deactivate { id } => {
            user_action(app, &id, UserAction::Deactivate).await?;
        }

        AdminCommands::DeleteUser { id, yes } => {
            if !yes && !confirm(&format!("Delete user {}?", id))? {
                println!("Aborted");
                return Ok(());
            }
            user_action(app, &id, UserAction::Delete).await?;
        }

        AdminCommands::Stats { period } => {
            let token = app.require_admin().await?;
            let system = app.api.system_stats(&token).await.map_err(api_error)?;
            let growth = app.api.user_growth(&token, &period).await.map_err(api_error)?;
            let engagement = app.api.engagement(&token, &period).await.map_err(api_error)?;

            let stats = json!({
                "system": system,
                "user_growth": growth,
                "engagement": engagement,
            });
            app.emit(&stats, || print_json_table(&stats))?;
        }

        AdminCommands::Health => {
            let token = app.require_admin().await?;
            let health = app.api.system_health(&token).await.map_err(api_error)?;
            app.emit(&health, || print_json_table(&health))?;
        }

        AdminCommands::Broadcast { message, title } => {
            let token = app.require_admin().await?;
            let mut body = json!({ "message": message });
            if let Some(title) = title {
                body["title"] = json!(title);
            }
            app.api.broadcast(&token, body).await.map_err(api_error)?;
            println!("Broadcast sent");
        }
    }

    Ok(())
}

async fn user_action(app: &App, id: &str, action: UserAction) -> anyhow::Result<()> {
    let token = app.require_admin().await?;
    action
        .perform(&app.api, &token, &EntityId::from(id))
        .await
        .map_err(api_error)?;
    println!("{}: user {}", action.label(), id);
    Ok(())
}

fn study(app: &App, topic: Option<&str>, section: Option<usize>) -> anyhow::Result<()> {
    let Some(topic) = topic else {
        return app.emit(&content::catalog(), || {
            println!("{:<12} {:<22} {}", "Technology", "Description", "Status");
            println!("{}", "-".repeat(48));
            for tech in content::catalog() {
                let status = if tech.available { "Available" } else { "Coming Soon" };
                println!("{:<12} {:<22} {}", tech.name, tech.description, status);
            }
        });
    };

    let tech = content::catalog()
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(topic) || t.name.eq_ignore_ascii_case(topic))
        .ok_or_else(|| anyhow!("Unknown technology: {}", topic))?;
    let document = content::open(tech).ok_or_else(|| anyhow!("{} is coming soon", tech.name))?;

    let mut sections = document.sections();
    if let Some(n) = section {
        let picked = n
            .checked_sub(1)
            .and_then(|i| sections.get(i).cloned())
            .with_context(|| format!("{} has {} sections", document.title, sections.len()))?;
        sections = vec![picked];
    }

    app.emit(&sections, || {
        println!("{}", document.title);
        println!("{}", document.description);
        for section in &sections {
            println!();
            println!("== {} ==", section.title);
            if section.has_theory() {
                println!("{}", section.theory);
            }
            if section.has_code() {
                println!();
                println!("--- {} ---", document.language);
                println!("{}", section.code);
            }
        }
    })
}

fn print_cards(cards: &[StatCard]) {
    for card in cards {
        println!("{} {:<14} {:>10}", card.icon, card.label, card.display_value());
    }
}

fn print_feed(feed: &ActivityFeed) {
    if feed.is_empty() {
        println!("No activities found for the selected criteria.");
        return;
    }

    for entry in &feed.entries {
        println!(
            "{} {:<16} {:<20} {}",
            entry.kind.icon(),
            entry.kind.label(),
            entry.user,
            entry.when
        );
        if !entry.description.is_empty() {
            println!("    {}", entry.description);
        }
        if let Some(details) = &entry.details {
            println!("    Details: {}", details.replace('\n', "\n    "));
        }
        let mut meta = format!("    IP: {}  User Agent: {}...", entry.ip_address, entry.user_agent);
        if let Some(location) = &entry.location {
            meta.push_str(&format!("  Location: {}", location));
        }
        println!("{}", meta);
    }

    if feed.is_truncated() {
        println!();
        println!(
            "Showing first {} activities. Use filters to narrow down results.",
            dashboard::FEED_LIMIT
        );
    }
}

/// Flat key/value listing of a JSON document
fn print_json_table(value: &serde_json::Value) {
    fn walk(prefix: &str, value: &serde_json::Value) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, inner) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    walk(&path, inner);
                }
            }
            serde_json::Value::String(s) => println!("{:<40} {}", prefix, s),
            other => println!("{:<40} {}", prefix, other),
        }
    }
    walk("", value);
}

fn write_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}

fn password_or_prompt(password: Option<String>) -> anyhow::Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    if let Ok(password) = std::env::var("STUDYDESK_PASSWORD") {
        return Ok(password);
    }

    let line = prompt("Password: ")?;
    if line.is_empty() {
        bail!("Password required");
    }
    Ok(line)
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    let answer = prompt(&format!("{} [y/N] ", question))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
