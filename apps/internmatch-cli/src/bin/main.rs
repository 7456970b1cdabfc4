use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use internmatch_core::config::Config;
use internmatch_index::CorpusIndex;
use internmatch_rank::{RecommendRequest, RecommendService, Recommender};

/// Recommend internships for a candidate profile.
#[derive(Debug, Parser)]
#[command(name = "internmatch", version)]
struct Args {
    /// Free-text skills, e.g. "python data science"
    #[arg(short, long)]
    skills: String,

    /// Preferred location
    #[arg(short, long)]
    location: Option<String>,

    /// Number of results (default from config)
    #[arg(short = 'n', long)]
    top_n: Option<i64>,

    #[arg(long)]
    location_boost: Option<f64>,

    #[arg(long)]
    stipend_boost: Option<f64>,

    /// Directory holding config.toml; relative data paths resolve against it
    #[arg(long, env = "INTERNMATCH_CONFIG_DIR", default_value = ".")]
    config_dir: PathBuf,

    /// Print the JSON response instead of a table
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(std::io::stderr).try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = Config::load_from(&args.config_dir).context("loading configuration")?;
    let settings = config.settings()?;
    let catalog_path = config.resolve_path(&settings.data.catalog_path);
    let model_path = config.resolve_path(&settings.data.model_path);

    let index = CorpusIndex::open(&catalog_path, &model_path)
        .with_context(|| format!("building index from {} and {}", catalog_path.display(), model_path.display()))?;

    let mut defaults = settings.recommend;
    if let Some(b) = args.location_boost {
        defaults.location_boost = b;
    }
    if let Some(b) = args.stipend_boost {
        defaults.stipend_boost = b;
    }
    let service = RecommendService::new(Recommender::new(Arc::new(index)), defaults);

    let request = RecommendRequest { skills: args.skills, location_preference: args.location };
    let response = service.handle(request, args.top_n)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }
    if response.recommendations.is_empty() {
        println!("No recommendations.");
        return Ok(());
    }
    for (i, r) in response.recommendations.iter().enumerate() {
        println!("{:>2}. [{:.3}] #{} {} @ {} ({}), stipend {:.0}", i + 1, r.score, r.internship_id, r.title, r.company, r.location, r.stipend);
        println!("    {}", r.reason);
    }
    tracing::info!(returned = response.recommendations.len(), "done");
    Ok(())
}
