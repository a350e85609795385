use crate::analyze::{run_analysis, AnalyzeArgs};
use crate::server;
use anemia_screen::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Anemia Risk Screening",
    about = "Serve or run the anemia risk screening engine from the command line",
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
    /// Score a single questionnaire and print the result
    Analyze(AnalyzeArgs),
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
        Command::Analyze(args) => run_analysis(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anemia_screen::screening::AnalyzerVariant;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["anemia-screen-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_repeated_symptoms() {
        let cli = Cli::try_parse_from([
            "anemia-screen-api",
            "analyze",
            "--profile",
            "teenager",
            "--symptom",
            "Fatigue",
            "--symptom",
            "Pâleur de la peau",
            "--photos",
            "--variant",
            "simulation",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.profile, "teenager");
                assert_eq!(args.symptoms, vec!["Fatigue", "Pâleur de la peau"]);
                assert!(args.photos);
                assert_eq!(args.variant, AnalyzerVariant::Simulation);
                assert!(!args.json);
            }
            other => panic!("expected analyze command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_variant() {
        let result = Cli::try_parse_from([
            "anemia-screen-api",
            "analyze",
            "--profile",
            "adult",
            "--variant",
            "neural",
        ]);
        assert!(result.is_err());
    }
}
