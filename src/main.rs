use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use deepl_api::cli::commands::{languages, translate, usage};
use deepl_api::cli::{Args, Command};
use deepl_api::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::UsageInformation) => usage::run_usage_information().await,
        Some(Command::Languages) => languages::run_languages().await,
        Some(Command::Translate(translate_args)) => translate::run_translate(translate_args).await,
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
