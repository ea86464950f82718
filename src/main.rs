use build_index::{config, discover, output, render};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("BUILD_INDEX_ON_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("BUILD_INDEX_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "build-index")]
#[command(about = "Generate an HTML index of hosted static builds")]
#[command(long_about = "\
Generate an HTML index of hosted static builds

Every top-level directory holding a build-name marker and an index.html
entry point is listed, sorted by the first line of its marker.

  builds/
  ├── build-index.toml     # Optional config (see 'build-index gen-config')
  ├── master/
  │   ├── build-name       # \"Latest master build\"
  │   └── index.html
  ├── pr-42/
  │   ├── build-name       # \"PR #42: SHACL editor\"
  │   └── index.html
  └── assets/              # No marker = not a build

With no arguments the page for the current directory is written to stdout.")]
#[command(version = version_string())]
struct Cli {
    /// Directory whose subdirectories are scanned for builds
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Config file (defaults to build-index.toml in the root, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log discovery decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the index page (default command)
    Generate {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List discovered builds without rendering
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock build-index.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Command::Generate { output: None }) {
        Command::Generate { output } => {
            let config = config::load_config(&cli.root, cli.config.as_deref())?;
            let entries = discover::discover(&cli.root, &config)?;
            let html = render::render_index(&entries, &config);
            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{html}\n"))?;
                    tracing::info!(path = %path.display(), builds = entries.len(), "index written");
                }
                None => println!("{html}"),
            }
        }
        Command::List { json } => {
            let config = config::load_config(&cli.root, cli.config.as_deref())?;
            let entries = discover::discover(&cli.root, &config)?;
            if json {
                println!("{}", output::format_list_json(&entries)?);
            } else {
                output::print_list_output(&entries, &config.entry_point);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Logs go to stderr so the generated page on stdout stays clean.
///
/// `RUST_LOG` takes precedence; otherwise warnings only, or debug with
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "build_index=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
