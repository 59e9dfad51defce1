use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use labtrack_api::{
    AuditEntity, AuditService, CallerContext, CreateTicketRequest, PageRequest, TicketService,
    TicketStatus, TransitionRequest,
};
use labtrack_postgres::repository::db_init::init_database;
use labtrack_postgres::PostgresRepositories;
use labtrack_service::{AuditRecorder, TicketWorkflowEngine};
use serde::Serialize;

mod config;
mod telemetry;

use config::LabTrackConfig;

#[derive(Parser, Debug)]
#[command(name = "labtrack")]
#[command(about = "Laboratory maintenance ticket workflow with an audit trail")]
struct Cli {
    /// Id of the acting user, required by commands that change state
    #[arg(long, global = true)]
    user_id: Option<i64>,

    /// Role claim of the acting user (Admin, Engineer, Technician, ...)
    #[arg(long, global = true)]
    role: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create the sample ticket when the store has none
    Seed,
    /// Open a new ticket against an asset
    CreateTicket {
        #[arg(long)]
        title: String,
        #[arg(long)]
        asset_id: i64,
    },
    /// Request a status change
    Transition {
        ticket_id: i64,
        /// Open, InProgress, Resolved or Closed
        status: String,
    },
    /// Show one ticket
    Show { ticket_id: i64 },
    /// List tickets, optionally filtered by status
    List {
        #[arg(long)]
        status: Option<TicketStatus>,
    },
    /// Show the audit trail of one entity, oldest first
    Audit {
        entity: AuditEntity,
        entity_id: i64,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 20)]
        page_size: usize,
    },
}

impl Cli {
    fn caller(&self) -> Result<CallerContext> {
        let user_id = self
            .user_id
            .context("--user-id is required for commands that change state")?;
        Ok(CallerContext::from_claims(user_id, self.role.as_deref()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LabTrackConfig::load_env_file()?;
    let config = LabTrackConfig::load().context("failed to load configuration")?;
    telemetry::init_telemetry(&config.logging)?;

    let mut database = config.database.clone();
    if matches!(cli.command, Commands::Migrate) {
        database.auto_migrate = false;
    }
    let repos = PostgresRepositories::connect(&database)
        .await
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to connect to the database")?;

    run(cli, &repos).await
}

async fn run(cli: Cli, repos: &PostgresRepositories) -> Result<()> {
    let workflow = TicketWorkflowEngine::new(repos.unit_of_work());
    let audit = AuditRecorder::new(repos.unit_of_work());

    match &cli.command {
        Commands::Migrate => {
            init_database(repos.pool()).await?;
            println!("migrations applied");
        }
        Commands::Seed => {
            let caller = cli.caller()?;
            if workflow.list_tickets(None).await?.is_empty() {
                let ticket = workflow
                    .create_ticket(
                        &caller,
                        CreateTicketRequest {
                            title: "Lens not working".to_string(),
                            asset_id: 1,
                        },
                    )
                    .await?;
                print_json(&ticket)?;
            } else {
                println!("tickets already present, nothing seeded");
            }
        }
        Commands::CreateTicket { title, asset_id } => {
            let caller = cli.caller()?;
            let request = CreateTicketRequest {
                title: title.clone(),
                asset_id: *asset_id,
            };
            print_json(&workflow.create_ticket(&caller, request).await?)?;
        }
        Commands::Transition { ticket_id, status } => {
            let caller = cli.caller()?;
            let request = TransitionRequest::new(*ticket_id, status.as_str());
            print_json(&workflow.request_transition(&caller, request).await?)?;
        }
        Commands::Show { ticket_id } => {
            print_json(&workflow.find_ticket(*ticket_id).await?)?;
        }
        Commands::List { status } => {
            print_json(&workflow.list_tickets(*status).await?)?;
        }
        Commands::Audit {
            entity,
            entity_id,
            page,
            page_size,
        } => {
            let request = PageRequest::for_page(*page_size, *page);
            let found = audit.query_by_entity(*entity, *entity_id, request).await?;
            print_json(&AuditPage {
                page: request.page_number(),
                total_pages: found.total_pages(),
                total: found.total,
                items: &found.items,
            })?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuditPage<'a, T> {
    page: usize,
    total_pages: usize,
    total: usize,
    items: &'a [T],
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
