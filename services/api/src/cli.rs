use crate::demo::{run_demo, run_recommend, DemoArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fra_dss::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FRA Decision Support",
    about = "Score villages against development schemes and plan the follow-up work",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print ranked scheme recommendations for a dataset
    Recommend(RecommendArgs),
    /// Walk through scoring, summary and action planning on the sample dataset
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fra_dss::dss::Priority;

    #[test]
    fn recommend_accepts_repeated_filters() {
        let cli = Cli::try_parse_from([
            "fra-dss-api",
            "recommend",
            "--priority",
            "high",
            "--priority",
            "Medium",
            "--scheme",
            "JJM",
            "--low-water",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.priorities, vec![Priority::High, Priority::Medium]);
                assert_eq!(args.scheme_ids, vec!["JJM".to_string()]);
                assert!(args.low_water);
                assert!(args.json);
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_priority_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["fra-dss-api", "recommend", "--priority", "urgent"]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["fra-dss-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
