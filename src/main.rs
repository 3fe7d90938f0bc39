use anyhow::{Context, Result};
use campus_store::{
    GalleryDraft, GalleryImage, GalleryPatch, InMemoryRemote, ListRecord, LogNotifier,
    OptimisticListStore, RemoteError, RemoteOp, StoreConfig,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FailOp {
    Create,
    Update,
    Delete,
}

impl From<FailOp> for RemoteOp {
    fn from(op: FailOp) -> Self {
        match op {
            FailOp::Create => RemoteOp::Create,
            FailOp::Update => RemoteOp::Update,
            FailOp::Delete => RemoteOp::Delete,
        }
    }
}

/// Replays a gallery editing session against an in-memory remote.
#[derive(Parser, Debug)]
#[command(name = "campus_store", version, about)]
struct Cli {
    /// Make every remote call of this kind fail (repeatable)
    #[arg(long, value_enum)]
    fail: Vec<FailOp>,

    /// Message carried by injected failures
    #[arg(long, default_value = "network down")]
    fail_message: String,

    /// Remote does not return created rows, so temporary ids stay in the list
    #[arg(long)]
    no_reconcile: bool,

    /// Store config as JSON (see StoreConfig)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Entity label used in notifications, overrides the config
    #[arg(long)]
    label: Option<String>,

    /// Print the final list as JSON
    #[arg(long)]
    json: bool,
}

fn seed_rows() -> Vec<GalleryImage> {
    vec![
        GalleryImage::from_draft(
            GalleryDraft::new("Annual Sports Meet", "https://cdn.college.edu/sports.jpg"),
            "g-100".to_string(),
            "2024-02-10T09:30:00.000Z".to_string(),
        ),
        GalleryImage::from_draft(
            GalleryDraft::new("Science Exhibition", "https://cdn.college.edu/science.jpg")
                .description("Projects from the final-year batch"),
            "g-101".to_string(),
            "2024-03-22T14:00:00.000Z".to_string(),
        ),
    ]
}

async fn load_config(path: Option<&PathBuf>) -> Result<StoreConfig> {
    let Some(path) = path else {
        return Ok(StoreConfig::new("gallery").entity_label("Gallery image"));
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading config {}", path.display()))?;
    Ok(StoreConfig::from_json(&raw)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref()).await?;
    if let Some(label) = &cli.label {
        config = config.entity_label(label);
    }

    let remote = Arc::new(InMemoryRemote::with_rows(seed_rows()));
    remote.return_created(!cli.no_reconcile);
    for op in &cli.fail {
        remote.fail_always((*op).into(), RemoteError::Rejected(cli.fail_message.clone()));
    }

    let store = OptimisticListStore::<GalleryImage>::with_config(Vec::new(), remote.clone(), config)
        .with_notifier(Arc::new(LogNotifier));
    let hydrated = store.refresh().await?;
    info!(store = store.name(), items = hydrated, "hydrated from remote");

    let created = store
        .create(
            GalleryDraft::new("Founders Day", "https://cdn.college.edu/founders.jpg")
                .description("Lamp lighting at the main quad"),
        )
        .await;
    info!(outcome = ?created, "create settled");

    let updated = store
        .update("g-100", GalleryPatch::default().title("Inter-College Sports Meet"))
        .await;
    info!(outcome = ?updated, "update settled");

    let deleted = store.delete("g-101").await;
    info!(outcome = ?deleted, "delete settled");

    let snapshot = store.snapshot().await;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot.items)?);
    } else {
        for item in &snapshot.items {
            println!(
                "{:<38} {:<28} {}",
                item.id,
                item.title,
                item.created_at.as_deref().unwrap_or("-")
            );
        }
    }
    if let Some(error) = snapshot.error {
        println!("last error: {error}");
    }
    println!("remote calls: {}", remote.total_calls());
    Ok(())
}
