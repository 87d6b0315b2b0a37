use bemestar_cli::cli::{Cli, Command, SettingsCommand};
use bemestar_cli::commands;
use clap::Parser;
use eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let data_dir = commands::data_dir(cli.data_dir)?;
    let now = jiff::Zoned::now();

    let output = match cli.command {
        Command::Score(args) => {
            let outcome = commands::score(&args, &data_dir, &now)?;
            commands::render_score(&outcome, args.format)?
        }
        Command::History(args) => commands::history(&args, &data_dir, &now)?,
        Command::Settings {
            command: SettingsCommand::Show,
        } => commands::show_settings(&data_dir)?,
        Command::Settings {
            command: SettingsCommand::Set { normal, severe },
        } => {
            commands::set_settings(&data_dir, normal, severe)?;
            commands::show_settings(&data_dir)?
        }
        Command::Questions { id } => commands::questions(&id)?,
    };

    print!("{output}");
    Ok(())
}
