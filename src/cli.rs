//! Command-line surface.
//!
//! Each subcommand wires the query services to a dataset snapshot and the
//! saved session; the services themselves stay pure.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::forms::{BidForm, ProjectForm, RegisterForm};
use crate::models::{Bid, Project, User, UserRole};
use crate::services;
use crate::services::{ProjectQuery, StatusFilter};
use crate::session::{Session, SessionStore};

#[derive(Debug, Parser)]
#[command(name = "tender", about = "Freelance marketplace demo", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse projects with search, tag, and status filters
    Explore {
        /// Case-insensitive text matched against title and description
        #[arg(long)]
        search: Option<String>,
        /// Tag filter; repeat to match any of several tags
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// "all", "open", "in-progress", or "completed"
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// List every tag in use, sorted
    Tags,
    /// Show one project with its bid summary and your conversation
    Show { project_id: String },
    /// Recommend open projects for the logged-in freelancer
    Recommend,
    /// Role-specific dashboard for the logged-in user
    Dashboard,
    /// Log in with an email from the dataset
    Login {
        #[arg(long)]
        email: String,
    },
    /// Forget the saved session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Register a new account and log in as it
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to the password when omitted
        #[arg(long)]
        confirm: Option<String>,
        /// "client" or "freelancer"
        #[arg(long)]
        role: String,
    },
    /// Validate a bid against a project and preview the resulting record
    Bid {
        project_id: String,
        #[arg(long)]
        amount: u32,
        #[arg(long)]
        days: u32,
        #[arg(long)]
        proposal: String,
    },
    /// Validate a project posting and preview the resulting record
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        budget_min: u32,
        #[arg(long)]
        budget_max: u32,
        /// Deadline date, YYYY-MM-DD
        #[arg(long)]
        deadline: Option<String>,
        /// Repeat for several tags
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
}

/// Execute one subcommand.
pub fn run(cli: Cli, config: &Config) -> Result<()> {
    let data = load_dataset(config)?;
    let store = match &config.session_path {
        Some(path) => SessionStore::new(path.clone()),
        None => SessionStore::with_default_path(),
    };

    match cli.command {
        Command::Explore { search, tags, status } => explore(&data, search, tags, &status),
        Command::Tags => {
            for tag in services::extract_tags(&data.projects) {
                println!("{}", tag);
            }
            Ok(())
        }
        Command::Show { project_id } => show(&data, &store, &project_id),
        Command::Recommend => recommend(&data, &store, config),
        Command::Dashboard => dashboard(&data, &store),
        Command::Login { email } => {
            let session = services::login(&data, &email)?;
            store.save(&session)?;
            let user = expect_user(&data, &session)?;
            println!("Logged in as {} ({})", user.name, user.role.as_str());
            Ok(())
        }
        Command::Logout => {
            store.clear()?;
            println!("Logged out");
            Ok(())
        }
        Command::Whoami => {
            match store.load()? {
                Some(session) => {
                    let user = expect_user(&data, &session)?;
                    println!("{} <{}> ({})", user.name, user.email, user.role.as_str());
                }
                None => println!("Not logged in"),
            }
            Ok(())
        }
        Command::Register { name, email, password, confirm, role } => {
            register(&data, &store, name, email, password, confirm, &role)
        }
        Command::Bid { project_id, amount, days, proposal } => {
            bid(&data, &store, &project_id, amount, days, proposal)
        }
        Command::Post { title, description, budget_min, budget_max, deadline, tags } => {
            post(&data, &store, title, description, budget_min, budget_max, deadline, tags)
        }
    }
}

fn load_dataset(config: &Config) -> Result<Dataset> {
    match &config.data_path {
        Some(path) => Dataset::from_json_file(path),
        None => Ok(Dataset::seed()),
    }
}

fn expect_user<'a>(data: &'a Dataset, session: &Session) -> Result<&'a User> {
    data.user(&session.user_id).ok_or_else(|| {
        warn!(user_id = %session.user_id, "Session user missing from dataset");
        Error::NotFound(format!("user {}", session.user_id))
    })
}

fn explore(data: &Dataset, search: Option<String>, tags: Vec<String>, status: &str) -> Result<()> {
    let status = StatusFilter::from_str(status)
        .ok_or_else(|| Error::InvalidInput(format!("unknown status filter: {}", status)))?;
    let query = ProjectQuery {
        text: search.unwrap_or_default(),
        tags,
        status,
    };

    let matches = services::filter_projects(&data.projects, &query);
    println!("Showing {} of {} projects", matches.len(), data.projects.len());
    for project in &matches {
        println!(
            "  [{}] {} - ${}-${} ({})",
            project.id, project.title, project.budget.min, project.budget.max,
            project.status.as_str()
        );
    }
    if matches.is_empty() {
        println!("  No projects found. Try adjusting your search or filter criteria.");
    }
    Ok(())
}

fn show(data: &Dataset, store: &SessionStore, project_id: &str) -> Result<()> {
    let project = data
        .project(project_id)
        .ok_or_else(|| Error::NotFound(format!("project {}", project_id)))?;
    let client = data
        .user(&project.client_id)
        .ok_or_else(|| Error::NotFound(format!("user {}", project.client_id)))?;

    println!("{} ({})", project.title, project.status.as_str());
    println!("Posted by {} on {}", client.name, project.created_at.format("%Y-%m-%d"));
    println!(
        "Budget ${}-${}, deadline {} ({} days remaining)",
        project.budget.min,
        project.budget.max,
        project.deadline.format("%Y-%m-%d"),
        project.days_until_deadline(crate::models::now())
    );
    println!("Tags: {}", project.tags.join(", "));
    println!();
    println!("{}", project.description);
    println!();

    let project_bids = services::project_bids(&data.bids, project_id);
    let summary = services::summarize_amounts(&project_bids);
    match &summary.amounts {
        Some(amounts) => println!(
            "{} bids - average ${:.0}, lowest ${}, highest ${}",
            summary.count, amounts.average, amounts.min, amounts.max
        ),
        None => println!("No bids yet"),
    }

    if let Some(session) = store.load()? {
        if session.role == UserRole::Freelancer {
            if let Some(own) = services::bid_for(&data.bids, project_id, &session.user_id) {
                println!(
                    "You already bid ${} with delivery in {} days ({})",
                    own.amount,
                    own.delivery_days,
                    own.status.as_str()
                );
            }
        }

        let thread = services::project_thread(&data.messages, project_id, &session.user_id);
        if !thread.is_empty() {
            println!();
            println!("Conversation:");
            for msg in thread {
                let sender = data.user(&msg.sender_id).map(|u| u.name.as_str()).unwrap_or("?");
                println!("  {} ({}): {}", sender, msg.created_at.format("%Y-%m-%d %H:%M"), msg.content);
            }
        }
    }

    Ok(())
}

fn recommend(data: &Dataset, store: &SessionStore, config: &Config) -> Result<()> {
    let session = store.load()?.ok_or(Error::Unauthenticated)?;
    let user = expect_user(data, &session)?;
    if !user.is_freelancer() {
        println!("Recommendations are for freelancer accounts");
        return Ok(());
    }

    let existing = services::bid_project_ids(&data.bids, &user.id);
    let picks = services::recommend_projects(
        user.skills.as_deref(),
        &data.projects,
        &existing,
        config.recommendation_limit,
    );

    if picks.is_empty() {
        println!("No recommendations available. Try updating your skills.");
        return Ok(());
    }
    println!("Recommended for you:");
    for project in picks {
        println!(
            "  [{}] {} - ${}-${}, deadline {}",
            project.id,
            project.title,
            project.budget.min,
            project.budget.max,
            project.deadline.format("%Y-%m-%d")
        );
    }
    Ok(())
}

fn dashboard(data: &Dataset, store: &SessionStore) -> Result<()> {
    let session = store.load()?.ok_or(Error::Unauthenticated)?;
    let user = expect_user(data, &session)?;

    match user.role {
        UserRole::Client => {
            let dash = services::client_dashboard(data, &user.id);
            println!("Client dashboard for {}", user.name);
            println!("  Total projects:      {}", dash.total_projects);
            println!("  Active projects:     {}", dash.active_projects);
            println!("  Bids received:       {}", dash.bids_received);
            println!("  Avg project budget:  ${:.0}", dash.average_budget);
            println!();
            println!("My projects:");
            for project in services::client_projects(data, &user.id) {
                println!("  [{}] {} ({})", project.id, project.title, project.status.as_str());
            }
        }
        UserRole::Freelancer => {
            let dash = services::freelancer_dashboard(data, &user.id);
            println!("Freelancer dashboard for {}", user.name);
            println!("  Active bids:          {}", dash.pending_bids);
            println!("  Projects in progress: {}", dash.in_progress_projects);
            println!("  Completed projects:   {}", dash.completed_projects);
            println!("  Total earnings:       ${}", dash.total_earnings);
            println!();
            println!("My bids:");
            for bid in services::freelancer_bids(&data.bids, &user.id) {
                let title = data
                    .project(&bid.project_id)
                    .map(|p| p.title.as_str())
                    .unwrap_or("(removed project)");
                println!(
                    "  [{}] ${} on {} ({})",
                    bid.id, bid.amount, title, bid.status.as_str()
                );
            }
        }
    }

    let unread = services::unread_count(&data.messages, &user.id);
    if unread > 0 {
        println!();
        println!("You have {} unread message(s)", unread);
    }
    Ok(())
}

fn register(
    data: &Dataset,
    store: &SessionStore,
    name: String,
    email: String,
    password: String,
    confirm: Option<String>,
    role: &str,
) -> Result<()> {
    let role = UserRole::from_str(role)
        .ok_or_else(|| Error::InvalidInput(format!("unknown role: {}", role)))?;

    let form = RegisterForm {
        name,
        email,
        password_confirm: confirm.unwrap_or_else(|| password.clone()),
        password,
        role,
    };
    let registration = form.validate().map_err(|errors| {
        for message in [&errors.name, &errors.email, &errors.password, &errors.password_confirm]
            .into_iter()
            .flatten()
        {
            eprintln!("  {}", message);
        }
        Error::Validation("registration form is invalid".into())
    })?;

    let registered = services::register(data, registration)?;
    store.save(&registered.session)?;
    println!(
        "Registered {} ({}) and logged in",
        registered.user.name,
        registered.user.role.as_str()
    );
    Ok(())
}

fn bid(
    data: &Dataset,
    store: &SessionStore,
    project_id: &str,
    amount: u32,
    days: u32,
    proposal: String,
) -> Result<()> {
    let session = store.load()?.ok_or(Error::Unauthenticated)?;
    let user = expect_user(data, &session)?;
    if !user.is_freelancer() {
        return Err(Error::Validation("only freelancer accounts can bid".into()));
    }

    let project = data
        .project(project_id)
        .ok_or_else(|| Error::NotFound(format!("project {}", project_id)))?;
    if !project.is_open() {
        return Err(Error::Validation(format!(
            "project {} is not open for bids",
            project_id
        )));
    }
    if services::bid_for(&data.bids, project_id, &user.id).is_some() {
        return Err(Error::AlreadyExists(format!(
            "bid on project {} by {}",
            project_id, user.name
        )));
    }

    let form = BidForm { amount, delivery_days: days, proposal };
    let validated = form.validate().map_err(|errors| {
        for message in [&errors.amount, &errors.delivery_days, &errors.proposal]
            .into_iter()
            .flatten()
        {
            eprintln!("  {}", message);
        }
        Error::Validation("bid form is invalid".into())
    })?;

    // The snapshot is immutable; show the record a backend would persist.
    let bid = Bid::from_draft(validated, project.id.clone(), user.id.clone());
    println!("Bid is valid. It would be recorded as:");
    println!("{}", serde_json::to_string_pretty(&bid)?);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn post(
    data: &Dataset,
    store: &SessionStore,
    title: String,
    description: String,
    budget_min: u32,
    budget_max: u32,
    deadline: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let session = store.load()?.ok_or(Error::Unauthenticated)?;
    let user = expect_user(data, &session)?;
    if !user.is_client() {
        return Err(Error::Validation("only client accounts can post projects".into()));
    }

    let deadline = deadline.map(|raw| parse_date(&raw)).transpose()?;
    let form = ProjectForm {
        title,
        description,
        budget_min,
        budget_max,
        deadline,
        tags,
    };
    let validated = form.validate(crate::models::now()).map_err(|errors| {
        for message in [
            &errors.title,
            &errors.description,
            &errors.budget_min,
            &errors.budget_max,
            &errors.deadline,
            &errors.tags,
        ]
        .into_iter()
        .flatten()
        {
            eprintln!("  {}", message);
        }
        Error::Validation("project form is invalid".into())
    })?;

    let project = Project::from_draft(validated, user.id.clone());
    println!("Project is valid. It would be recorded as:");
    println!("{}", serde_json::to_string_pretty(&project)?);
    Ok(())
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    let date = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| Error::InvalidInput(format!("invalid date {:?}: {}", raw, e)))?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}
