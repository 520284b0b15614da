use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studybuddy", version, about = "Study Buddy CLI")]
struct Cli {
    /// Roster file (.toml or .json); defaults to roster.default_path from config
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List students in the roster
    Students,
    /// Compatibility score between two students
    Score { a: String, b: String },
    /// Best study partner for a student
    Match { name: String },
    /// Days both students are free
    Times { a: String, b: String },
    /// Schedule a study session between two students
    Schedule {
        a: String,
        b: String,
        /// Time slot; defaults to the first common time
        #[arg(long)]
        slot: Option<String>,
    },
    /// Log study hours for a subject and print the progress report
    Progress {
        name: String,
        subject: String,
        #[arg(value_parser = commands::progress::parse_hours)]
        hours: f64,
    },
    /// Set a study goal
    Goal {
        name: String,
        subject: String,
        #[arg(value_parser = commands::progress::parse_hours)]
        hours: f64,
    },
    /// Progress report for a student
    Report { name: String },
    /// Run the interactive break reminder
    Remind {
        /// Minutes between breaks; defaults to reminder.break_minutes from config
        #[arg(long)]
        minutes: Option<f64>,
    },
    /// Print a random study tip
    Tip {
        /// Tips file; defaults to tips.path from config
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STUDYBUDDY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let ctx = commands::Context {
        roster: cli.roster,
        json: cli.json,
    };
    let result = match cli.command {
        Commands::Students => commands::students::run(&ctx),
        Commands::Score { a, b } => commands::matching::score(&ctx, &a, &b),
        Commands::Match { name } => commands::matching::best_match(&ctx, &name),
        Commands::Times { a, b } => commands::matching::times(&ctx, &a, &b),
        Commands::Schedule { a, b, slot } => commands::session::run(&ctx, &a, &b, slot),
        Commands::Progress {
            name,
            subject,
            hours,
        } => commands::progress::update(&ctx, &name, &subject, hours),
        Commands::Goal {
            name,
            subject,
            hours,
        } => commands::progress::goal(&ctx, &name, &subject, hours),
        Commands::Report { name } => commands::progress::report(&ctx, &name),
        Commands::Remind { minutes } => commands::remind::run(minutes),
        Commands::Tip { file } => commands::tip::run(&ctx, file),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
