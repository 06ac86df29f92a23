mod cli;

use crate::cli::*;
use clap::{Args, Parser, Subcommand};
use jenkins_log_lens::config::ConfigFile;
use jenkins_log_lens::extractor::DEFAULT_MAX_LINES;
use jenkins_log_lens::lens_error::LensError;
use std::env;
use std::io::stdout;
use std::path::PathBuf;
use strum_macros::Display;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name="Jenkins Log Lens",
  author,
  version,
  about(env!("CARGO_PKG_DESCRIPTION")),
  long_about=None,
  arg_required_else_help=true
)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Print debug logs to stderr. RUST_LOG overrides this.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Jenkins connection settings. Flags win over environment variables, which win over the config file.
#[derive(Args)]
struct ConnectionArgs {
    /// Jenkins root URL.
    #[arg(long, env = "JENKINS_URL", global = true)]
    url: Option<String>,

    /// Username like "somebody@email.com"
    #[arg(short, long, env = "JENKINS_USERNAME", global = true)]
    username: Option<String>,

    /// API token from Jenkins.
    /// You can get it from Jenkins web page.
    /// See also: https://www.jenkins.io/doc/book/using/remote-access-api/
    #[arg(short, long, env = "JENKINS_API_TOKEN", hide_env_values = true, global = true)]
    api_token: Option<String>,

    /// HTTP timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// Config file path.
    /// default: ~/.jenkins-log-lens.toml
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

impl ConnectionArgs {
    fn overrides(&self) -> ConfigFile {
        ConfigFile {
            url: self.url.clone(),
            username: self.username.clone(),
            api_token: self.api_token.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand, Display)]
enum Commands {
    /// Split a Jenkins URL or job path into job path, job name and build number.
    Locate {
        /// Jenkins URL or bare job path.
        input: String,
    },
    /// Cut a console log down to the lines around errors.
    Extract {
        /// log file. reads stdin when missing.
        file: Option<PathBuf>,

        /// max lines of the excerpt. the tail is kept on overflow.
        #[arg(short, long, default_value_t = DEFAULT_MAX_LINES)]
        max_lines: usize,

        /// error keyword, case-insensitive.
        /// repeated input --keyword replaces the default keywords.
        #[arg(short, long = "keyword", action = clap::ArgAction::Append)]
        keywords: Vec<String>,
    },
    /// Fetch the console log of a build.
    Log {
        /// Jenkins job URL or job path.
        job_url: String,

        /// build number. default: the number in the URL, else the latest build.
        #[arg(short = '#', long)]
        build: Option<u32>,

        /// print the full log instead of the error sections.
        #[arg(long)]
        raw: bool,

        /// max lines of the excerpt.
        #[arg(short, long, default_value_t = DEFAULT_MAX_LINES)]
        max_lines: usize,
    },
    /// Show job or build information.
    Info {
        /// Jenkins job URL or job path.
        job_url: String,
    },
    /// Check the connection settings.
    Ping,
    /// Check the connection settings and save them to the config file.
    Login,
    /// Serve the log tools over stdio (JSON-RPC).
    Serve,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let mut filter = EnvFilter::from_default_env();
    if env::var("RUST_LOG").is_err() {
        for directive in [
            format!("jenkins_log_lens={}", level),
            format!("jll={}", level),
            "hyper=warn".to_string(),
            "reqwest=warn".to_string(),
        ] {
            if let Ok(directive) = directive.parse() {
                filter = filter.add_directive(directive);
            }
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(command) = cli.command {
        debug!("Running command {}", command);

        if let Err(err) = main_cli(command, &cli.connection).await {
            err.colored_println(&mut stdout());
            std::process::exit(1);
        }
    }
}

async fn main_cli(command: Commands, connection: &ConnectionArgs) -> Result<(), LensError> {
    let mut stdout = stdout();
    let config_path = connection.config.as_deref();

    match command {
        Commands::Locate { input } => {
            // jll locate
            cli_do_locate(&mut stdout, &input)?;
        }
        Commands::Extract {
            file,
            max_lines,
            keywords,
        } => {
            // jll extract
            cli_do_extract(&mut stdout, file.as_deref(), max_lines, keywords)?;
        }
        Commands::Log {
            job_url,
            build,
            raw,
            max_lines,
        } => {
            // jll log
            let config = resolve_config(connection.overrides(), config_path)?;
            cli_do_log(&mut stdout, &config, &job_url, build, !raw, max_lines).await?;
        }
        Commands::Info { job_url } => {
            // jll info
            let config = resolve_config(connection.overrides(), config_path)?;
            cli_do_info(&mut stdout, &config, &job_url).await?;
        }
        Commands::Ping => {
            // jll ping
            let config = resolve_config(connection.overrides(), config_path)?;
            cli_do_ping(&mut stdout, &config).await?;
        }
        Commands::Login => {
            // jll login
            cli_do_login(&mut stdout, connection.overrides(), config_path).await?;
        }
        Commands::Serve => {
            // jll serve
            let config = resolve_config(connection.overrides(), config_path)?;
            cli_do_serve(&config).await?;
        }
    }

    Ok(())
}
