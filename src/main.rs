use anyhow::Result;
use clap::Parser;
use gitpush::ColorChoice;
use gitpush::areas::git::Git;
use gitpush::areas::log_file::{DEFAULT_LOG_FILE, LogFile};
use gitpush::areas::session::Session;
use gitpush::artifacts::push::commit_request::DEFAULT_BRANCH;
use gitpush::artifacts::push::outcome::RunOutcome;
use gitpush::commands::push::{DEFAULT_REMOTE, PushOptions};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "gitpush",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Stage, commit and push in one go",
    long_about = "Runs `git add .`, `git commit -m <message>` and `git push -u origin <branch>` \
    in sequence, asking for the commit message and the branch name first. \
    Every run appends one line to a log file in the working directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, default_value = DEFAULT_LOG_FILE, help = "File the run outcome is appended to")]
    log_file: PathBuf,
    #[arg(long, default_value = DEFAULT_BRANCH, help = "Branch used when none is entered")]
    default_branch: String,
    #[arg(long, default_value = DEFAULT_REMOTE, help = "Remote the branch is pushed to")]
    remote: String,
    #[arg(long, value_enum, default_value_t = ColorChoice::Always, help = "When to color status lines")]
    color: ColorChoice,
    #[arg(short, long, help = "Print diagnostics to stderr")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<RunOutcome> {
    let pwd = std::env::current_dir()?;
    let log_file = LogFile::open(cli.log_file.into_boxed_path())?;
    let reader = tokio::io::BufReader::new(tokio::io::stdin());

    let mut session = Session::new(
        Box::new(std::io::stdout()),
        Box::new(reader),
        Git::new(pwd.into_boxed_path()),
        log_file,
        PushOptions::new(cli.default_branch, cli.remote),
    );

    session.run(gitpush::interrupted()).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.color.apply();

    let exit_code = match run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            eprintln!("Error: {error:#}");
            1
        }
    };

    // exit here: the runtime would otherwise wait on the blocking stdin reader
    std::process::exit(exit_code);
}
