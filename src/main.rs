use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launch_dash::config::DashboardConfig;
use launch_dash::dashboard::Dashboard;
use launch_dash::dataset::Dataset;
use launch_dash::models::{PayloadRange, SelectorEvent, SiteChoice};
use launch_dash::{api, report};

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(about = "Interactive dashboard for historical rocket launch records")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Port for the HTTP server
        #[arg(short, long)]
        port: Option<u16>,

        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Launch records CSV
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Print the dataset summary
    Summary {
        /// Launch records CSV
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Print both charts for a selection
    Report {
        /// Launch records CSV
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Launch site, or ALL
        #[arg(short, long)]
        site: Option<String>,

        /// Lower payload bound in kg
        #[arg(long)]
        low: Option<f64>,

        /// Upper payload bound in kg
        #[arg(long)]
        high: Option<f64>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "launch_dash=debug,tower_http=debug".into()),
    );

    // Logs go to stderr so report output on stdout stays clean
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(config: DashboardConfig) -> anyhow::Result<()> {
    let dataset = Dataset::load(&config.data_path)?;
    let app = api::create_router(dataset);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        "Launch dashboard listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn print_report(
    config: DashboardConfig,
    site: Option<String>,
    low: Option<f64>,
    high: Option<f64>,
) -> anyhow::Result<()> {
    let dataset = Dataset::load(&config.data_path)?;
    let summary = dataset.summary().clone();

    let site = site.map(|s| SiteChoice::parse(&s)).unwrap_or_default();
    if let SiteChoice::Site(name) = &site {
        if !summary.has_site(name) {
            anyhow::bail!("Launch site not found: {}", name);
        }
    }

    let mut dashboard = Dashboard::new(dataset, report::TextRenderer::new());
    dashboard.dispatch(SelectorEvent::SiteChanged(site));
    if low.is_some() || high.is_some() {
        dashboard.dispatch(SelectorEvent::RangeChanged(PayloadRange::new(
            low.unwrap_or(summary.min_payload),
            high.unwrap_or(summary.max_payload),
        )));
    }

    print!("{}", dashboard.renderer().output());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = DashboardConfig::from_env();

    match cli.command {
        Some(Commands::Serve { port, host, data }) => {
            serve(config.with_overrides(data, host, port)).await?;
        }
        Some(Commands::Summary { data }) => {
            let config = config.with_overrides(data, None, None);
            let dataset = Dataset::load(&config.data_path)?;
            print!("{}", report::render_summary(dataset.summary()));
        }
        Some(Commands::Report {
            data,
            site,
            low,
            high,
        }) => {
            print_report(config.with_overrides(data, None, None), site, low, high)?;
        }
        None => {
            // Default: start server
            serve(config).await?;
        }
    }

    Ok(())
}
