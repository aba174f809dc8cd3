use clap::{Parser, Subcommand, ValueEnum};
use docnav::{assemble, config, output, scan, types::count_leaves};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Generate a documentation sidebar from front-matter titles")]
#[command(long_about = "\
Generate a documentation sidebar from front-matter titles

Every Markdown file under the source directory whose front matter has a
title is added to the sidebar. Slashes in the title create groups:

  docs/
  ├── index.md              title: Home              → Home
  ├── guide/
  │   ├── intro.md          title: Guide/Intro       → Guide › Intro
  │   └── setup.md          title: Guide/Setup       → Guide › Setup
  ├── notes.md              (no front matter)        → not listed
  └── node_modules/         (--ignore node_modules)  → not scanned

Sibling order follows the filesystem listing order.

Run 'docnav gen-config' to generate a documented docnav.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "docnav.toml", global = true)]
    config: PathBuf,

    /// Source directory (overrides sidebar.source_dir)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Directory name to skip; repeat for several (overrides sidebar.ignore)
    #[arg(long = "ignore", value_name = "NAME", global = true)]
    ignore: Vec<String>,

    /// Log skipped documents and other details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List documents that carry a navigation title
    Scan,
    /// Print the sidebar tree
    Tree,
    /// Write the site config with the generated sidebar merged in
    Build(BuildArgs),
    /// Validate config and content without writing anything
    Check,
    /// Print a stock docnav.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Output file (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let load_config = || {
        let overrides = config::overrides_value(cli.source.as_deref(), &cli.ignore);
        config::load_layered(&cli.config, overrides)
    };

    match cli.command {
        Command::Scan => {
            let config = load_config()?;
            let root = config.sidebar.require_source_dir()?;
            let records = scan::scan(root, &config.sidebar.scan_options())?;
            output::print_records(&records);
        }
        Command::Tree => {
            let config = load_config()?;
            let nodes = assemble::generate_sidebar(&scan::FsSource, &config.sidebar)?;
            output::print_tree(&nodes);
        }
        Command::Build(args) => {
            let config = load_config()?;
            let site = assemble::assemble(&config)?;
            let rendered = match args.format {
                Format::Json => serde_json::to_string_pretty(&site)? + "\n",
                Format::Toml => toml::to_string_pretty(&site)?,
            };
            match args.output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, rendered)?;
                    println!("==> Wrote {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }
        Command::Check => {
            let config = load_config()?;
            let root = config.sidebar.require_source_dir()?;
            println!("==> Checking {}", root.display());
            let nodes = assemble::generate_sidebar(&scan::FsSource, &config.sidebar)?;
            output::print_tree(&nodes);
            println!("{}", output::format_summary(&nodes));
            if count_leaves(&nodes) == 0 {
                println!("==> No titled documents found");
            } else {
                println!("==> Content is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "docnav=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
