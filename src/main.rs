// File: ./src/main.rs
// CLI trigger surface: every entry point funnels into Aggregator::aggregate
use anyhow::{Result, bail};
use std::env;
use std::time::Duration;
use todoboard::aggregate::Aggregator;
use todoboard::config::Settings;
use todoboard::store::FsStore;
use tracing_subscriber::EnvFilter;

fn usage() {
    eprintln!("Usage: todoboard [COMMAND]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run [VAULT_DIR]        Aggregate once (default command)");
    eprintln!("  watch [SECS] [VAULT_DIR]  Re-aggregate every SECS seconds (default 60)");
    eprintln!("  target <PATH>          Set the dashboard note path");
    eprintln!("  exclude <PREFIX>       Add an excluded path prefix");
    eprintln!("  include <PREFIX>       Remove an excluded path prefix");
    eprintln!("  show                   Print the current settings");
    eprintln!();
    eprintln!("The vault directory comes from the argument or from config.toml.");
}

fn build_aggregator(vault_arg: Option<String>) -> Result<Aggregator<FsStore>> {
    let mut settings = Settings::load();
    if let Some(dir) = vault_arg {
        settings.vault_dir = Some(dir);
    }
    let Some(dir) = settings.vault_dir.clone() else {
        bail!("no vault directory configured; pass one or set vault_dir in config.toml");
    };
    Ok(Aggregator::new(FsStore::new(dir), settings))
}

async fn run_once(vault_arg: Option<String>) -> Result<()> {
    let mut aggregator = build_aggregator(vault_arg)?;
    let report = aggregator.aggregate().await?;
    // Single-shot run notification.
    println!("{}", report.summary());
    Ok(())
}

async fn run_watch(secs: u64, vault_arg: Option<String>) -> Result<()> {
    let mut aggregator = build_aggregator(vault_arg)?;
    let mut ticker = tokio::time::interval(Duration::from_secs(secs.max(1)));
    loop {
        ticker.tick().await;
        // Every run reports, the quiet ones included.
        match aggregator.aggregate().await {
            Ok(report) => println!("{}", report.summary()),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todoboard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => run_once(None).await,
        Some("run") => run_once(args.get(1).cloned()).await,
        Some("watch") => {
            // "watch 300 ~/vault", "watch 300", "watch ~/vault" and plain
            // "watch" are all accepted.
            let (secs, vault) = match args.get(1).map(|a| a.parse::<u64>()) {
                Some(Ok(secs)) => (secs, args.get(2).cloned()),
                Some(Err(_)) => (60, args.get(1).cloned()),
                None => (60, None),
            };
            run_watch(secs, vault).await
        }
        Some("target") => {
            let Some(path) = args.get(1) else {
                bail!("target requires a path argument");
            };
            let mut settings = Settings::load();
            settings.target_path = path.clone();
            settings.save()?;
            println!("Dashboard path set to {}", path);
            Ok(())
        }
        Some("exclude") => {
            let Some(prefix) = args.get(1) else {
                bail!("exclude requires a prefix argument");
            };
            let mut settings = Settings::load();
            if !settings.excluded_prefixes.contains(prefix) {
                settings.excluded_prefixes.push(prefix.clone());
                settings.save()?;
            }
            println!("Excluding {}", prefix);
            Ok(())
        }
        Some("include") => {
            let Some(prefix) = args.get(1) else {
                bail!("include requires a prefix argument");
            };
            let mut settings = Settings::load();
            settings.excluded_prefixes.retain(|p| p != prefix);
            settings.save()?;
            println!("No longer excluding {}", prefix);
            Ok(())
        }
        Some("show") => {
            let settings = Settings::load();
            println!("vault_dir:         {:?}", settings.vault_dir);
            println!("target_path:       {}", settings.target_path);
            println!("excluded_prefixes: {:?}", settings.excluded_prefixes);
            Ok(())
        }
        Some("help") | Some("--help") | Some("-h") => {
            usage();
            Ok(())
        }
        Some(other) => {
            usage();
            bail!("unknown command: {}", other);
        }
    }
}
