use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use shiftcast::build_scheduler;
use shiftcast_api::{config::parse_log_level, init_tracing};
use shiftcast_clients::config::ClientConfig;
use shiftcast_core::{config::SchedulingConfig, models::schedule::ScheduleRequest};
use shiftcast_db::{create_pool, schema::initialize_database};

#[derive(Parser)]
#[command(name = "schedule-run")]
#[command(about = "Regenerate shifts for a window from the demand forecast")]
#[command(version)]
struct Cli {
    #[arg(long, conflicts_with = "month", help = "Schedule the N days after today")]
    days: Option<u32>,

    #[arg(long, value_name = "YYYY-MM", help = "Schedule a whole calendar month")]
    month: Option<String>,

    #[arg(long, help = "RNG seed for a reproducible assignment")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let cli = Cli::parse();

    let settings = SchedulingConfig::from_env()?;
    let clients = ClientConfig::from_env()?;
    init_tracing(parse_log_level(
        &std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
    ))?;

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| color_eyre::eyre::eyre!("DATABASE_URL environment variable must be set"))?;
    let db_pool = create_pool(&database_url).await?;
    initialize_database(&db_pool).await?;

    let request = ScheduleRequest {
        days_ahead: cli.days,
        month: cli.month,
        seed: cli.seed,
    };
    let (window, horizon) = request.resolve(
        Utc::now().date_naive(),
        settings.default_days,
        settings.month_buffer_days,
    )?;

    let (scheduler, _) = build_scheduler(db_pool, &settings, &clients)?;
    let run = scheduler
        .run(window, horizon, request.seed.or(settings.seed))
        .await?;

    println!("{}", serde_json::to_string_pretty(&run)?);
    Ok(())
}
