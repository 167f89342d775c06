use clap::{CommandFactory, Parser, Subcommand};
use helpthyself_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;
mod notifier;

#[derive(Parser)]
#[command(name = "hts", version, about = "Help Thy Self personal dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily quotes and favorites
    Quote {
        #[command(subcommand)]
        action: commands::quote::QuoteAction,
    },
    /// Affirmation pool and favorites
    Affirmation {
        #[command(subcommand)]
        action: commands::affirmation::AffirmationAction,
    },
    /// Goal management
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Habit tracking and streak
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Journal draft and entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Focus timer
    Focus {
        #[command(subcommand)]
        action: commands::focus::FocusAction,
    },
    /// Notification and offline settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Export, import and reset
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_tracing(&config);

    let result = match cli.command {
        Commands::Quote { action } => commands::quote::run(action, &config),
        Commands::Affirmation { action } => commands::affirmation::run(action, &config),
        Commands::Goal { action } => commands::goal::run(action, &config),
        Commands::Habit { action } => commands::habit::run(action, &config),
        Commands::Journal { action } => commands::journal::run(action, &config),
        Commands::Focus { action } => commands::focus::run(action, &config),
        Commands::Settings { action } => commands::settings::run(action, &config),
        Commands::Data { action } => commands::data::run(action, &config),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "hts", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
