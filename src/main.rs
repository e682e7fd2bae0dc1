use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use linkprobe::models::{ProbeReport, ProbeSource};
use linkprobe::{ProbeSession, Prober, Settings};

/// Pick a share link from a proxy subscription feed and locate its server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Probe this share link instead of fetching a subscription feed
    #[arg(short, long, value_name = "LINK", conflicts_with = "url")]
    link: Option<String>,

    /// Subscription feed to pick from instead of a random configured one
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Seed for feed and line selection
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,

    /// Skip the geolocation lookup
    #[arg(long)]
    no_location: bool,
}

fn print_report(report: &ProbeReport) {
    println!("Type:     {}", report.kind);
    println!("Config:   {}", report.config);
    match report.ip {
        Some(ip) => println!("IP:       {}", ip),
        None => println!("IP:       -"),
    }
    println!("Location: {}", report.location);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref().unwrap_or(""))
        .context("failed to load settings")?;
    let mut prober = Prober::from_settings(&settings).context("failed to set up HTTP client")?;
    if args.no_location {
        prober = prober.without_location();
    }

    let session = ProbeSession::new(
        prober,
        settings.subscription_urls.clone(),
        args.seed.or(settings.seed),
    );
    let mut rx = session.subscribe();

    let id = match (args.link, args.url) {
        (Some(link), _) => session.trigger(ProbeSource::Link(link)),
        (None, Some(url)) => session.trigger(ProbeSource::Subscription(url)),
        (None, None) => session.trigger_random()?,
    };
    info!("Probe {} started", id);

    let response = rx
        .wait_for(|latest| latest.as_ref().is_some_and(|r| r.request_id == id))
        .await
        .context("probe session closed")?
        .clone()
        .context("probe produced no response")?;

    match &response.outcome {
        Ok(report) => print_report(report),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
