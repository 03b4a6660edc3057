use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::process::ExitCode;

use hiretrack::commands::{
    LsOptions, cmd_config_get, cmd_config_set, cmd_config_show, cmd_ls, cmd_options,
    parse_filter_arg,
};
use hiretrack::error::Result;
use hiretrack::types::EntityKind;

#[derive(Parser)]
#[command(name = "hiretrack")]
#[command(about = "Terminal client for applicant tracking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List records of an entity
    #[command(visible_alias = "list")]
    Ls {
        /// Entity: candidates, interviews, job-openings, job-requests,
        /// referrals, users
        entity: EntityKind,

        /// 1-based page number
        #[arg(short, long)]
        page: Option<u32>,

        /// Rows per page
        #[arg(short, long)]
        rows: Option<u32>,

        /// Free-text search term
        #[arg(short, long)]
        search: Option<String>,

        /// Facet filter as key=value[,value...]; repeatable
        #[arg(short, long = "filter", value_name = "KEY=VALUES")]
        filters: Vec<String>,

        /// Keep records on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from_date: Option<String>,

        /// Keep records on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to_date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the option list for a dropdown field
    Options {
        /// Entity the field belongs to
        entity: EntityKind,

        /// Field name, e.g. status
        field: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read one value
    Get {
        /// Dot-notation key, e.g. backend.base_url
        key: String,
    },
    /// Set one value
    Set {
        /// Dot-notation key, e.g. backend.base_url
        key: String,
        /// New value
        value: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ls {
            entity,
            page,
            rows,
            search,
            filters,
            from_date,
            to_date,
            json,
        } => {
            let parsed: Result<Vec<_>> = filters.iter().map(|f| parse_filter_arg(f)).collect();
            match parsed {
                Ok(filters) => {
                    cmd_ls(
                        entity,
                        LsOptions {
                            page,
                            rows,
                            search,
                            filters,
                            from_date,
                            to_date,
                            output_json: json,
                        },
                    )
                    .await
                }
                Err(e) => Err(e),
            }
        }
        Commands::Options {
            entity,
            field,
            json,
        } => cmd_options(entity, &field, json).await,
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "hiretrack", &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
