//! randorg - run the Random.org nodes from the command line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use randorg_engine::description::NodeKind;
use randorg_engine::infrastructure::json_host::{
    JsonParameterSource, RunInput, StaticErrorReporter,
};
use randorg_engine::infrastructure::settings::RandomOrgSettings;
use randorg_engine::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a node's description as JSON
    Describe {
        /// `range` or `single`
        node: NodeKind,
    },
    /// Run a node over a JSON run document
    Run {
        /// `range` or `single`
        node: NodeKind,
        /// Emit failing items as error records instead of aborting
        #[arg(long)]
        continue_on_fail: bool,
        /// Run document; read from stdin when omitted
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "randorg_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let output = match args.command {
        Command::Describe { node } => serde_json::to_string_pretty(&node.description())?,
        Command::Run {
            node,
            continue_on_fail,
            input,
        } => {
            let input = read_input(input.as_ref())?;
            let settings = RandomOrgSettings::from_env();
            let app = App::from_settings(settings)?;

            let params = JsonParameterSource::new(input, node.description().parameter_defaults());
            let reporter = StaticErrorReporter::new(app.node_name(node), continue_on_fail);

            let items = app.run(node, &params, &reporter).await?;
            tracing::info!(node = %node, items = items.len(), "Run complete");
            serde_json::to_string_pretty(&items)?
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<RunInput> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            RunInput::from_reader(file)
                .with_context(|| format!("Invalid run document in {}", path.display()))
        }
        None => RunInput::from_reader(std::io::stdin().lock())
            .context("Invalid run document on stdin"),
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides, then fall back to the working directory.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
