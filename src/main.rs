use clap::{Parser, Subcommand};
use std::path::PathBuf;
use supernotes_launcher::launcher::launch_encoded;
use supernotes_launcher::logging;
use supernotes_launcher::plugin::Plugin;
use supernotes_launcher::plugins::supernotes::SupernotesPlugin;
use supernotes_launcher::settings::Preferences;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file, re-read on every invocation
    #[arg(short, long, default_value = "settings.json")]
    settings: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the result list for a query as JSON
    Query {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Run a selected entry, given as printed by `query`
    Enter { action: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logging settings come from the same file, so load it before the
    // subscriber exists and report a failure once it does.
    let loaded = Preferences::load(&args.settings);
    match &loaded {
        Ok(prefs) => logging::init(prefs.debug_logging, prefs.log_file.as_ref().map(PathBuf::from)),
        Err(_) => logging::init(false, None),
    }
    if let Err(e) = &loaded {
        tracing::warn!("failed to load settings from {}: {e}", args.settings.display());
    }

    let plugin = SupernotesPlugin::new(&args.settings);
    match args.command {
        Command::Query { text } => {
            let actions = plugin.search(&text.join(" "));
            println!("{}", serde_json::to_string(&actions)?);
        }
        Command::Enter { action } => {
            if let Err(e) = launch_encoded(&action, &plugin) {
                tracing::error!("failed to launch action: {e:#}");
            }
        }
    }
    Ok(())
}
