use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use dbcomment::commands::{self, CommentRequest, ShowFormat};
use dbcomment::config;
use dbcomment::constants::CONFIG_FILENAME;
use dotenv::dotenv;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("value").required(true).args(["text", "null"])))]
struct CommentArgs {
    /// Object kind: table, view, index, constraint, constant, alias, role,
    /// schema, sequence, trigger, user, domain
    kind: String,

    /// Object name (table name when --column is given)
    name: String,

    /// Schema of the object; defaults to the session's current schema
    #[arg(long)]
    schema: Option<String>,

    /// Comment on this column of the table instead of the table itself
    #[arg(long)]
    column: Option<String>,

    /// Comment text
    #[arg(long)]
    text: Option<String>,

    /// Clear the comment
    #[arg(long)]
    null: bool,

    #[command(flatten)]
    catalog_args: config::CatalogArgs,

    #[command(flatten)]
    session_args: config::SessionArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Set or clear the comment on a catalog object
    Comment(CommentArgs),

    /// List all comments in the catalog
    Show {
        /// Output format
        #[arg(long, value_enum, default_value = "sql")]
        format: ShowFormat,

        #[command(flatten)]
        catalog_args: config::CatalogArgs,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);
    run_main(cli)
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main(cli: Cli) -> Result<()> {
    let (file_config, root_dir) = config::load_config(&cli.config_file)?;

    match cli.command {
        Commands::Comment(args) => {
            let cli_config = config::ConfigInput {
                catalog: Some(args.catalog_args.clone().into()),
                session: Some(args.session_args.clone().into()),
            };
            let config = config::ConfigBuilder::new()
                .with_root_dir(&root_dir)
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve()?;

            let request = CommentRequest {
                kind: args.kind,
                schema: args.schema,
                name: args.name,
                column: args.column,
                text: if args.null { None } else { args.text },
            };
            commands::cmd_comment(&config, &request)
        }
        Commands::Show {
            format,
            catalog_args,
        } => {
            let cli_config = config::ConfigInput {
                catalog: Some(catalog_args.into()),
                session: None,
            };
            let config = config::ConfigBuilder::new()
                .with_root_dir(&root_dir)
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve()?;

            commands::cmd_show(&config, format)
        }
    }
}
