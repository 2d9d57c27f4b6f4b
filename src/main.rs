use clap::Parser;
use passkeep::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passkeep::cli::commands::init::execute(&cli),
        Commands::Add { ref name } => passkeep::cli::commands::add::execute(&cli, name),
        Commands::Get {
            ref name,
            description,
            show,
        } => passkeep::cli::commands::get::execute(&cli, name, description, show),
        Commands::Rm { ref name } => passkeep::cli::commands::rm::execute(&cli, name),
        Commands::Find { ref keyword } => passkeep::cli::commands::find::execute(&cli, keyword),
        Commands::Gen { length, show } => passkeep::cli::commands::gen::execute(length, show),
    };

    if let Err(e) = result {
        passkeep::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
