mod corr;

use clap::{Parser, Subcommand};
use corr::CorrArgs;

#[derive(Parser, Debug)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Fit a log-log correlation between two columns of a count table.
    Corr {
        #[clap(flatten)]
        args: CorrArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        MainMenu::Corr { args } => {
            args.setup();
            args.run()?;
        },
    }
    Ok(())
}
