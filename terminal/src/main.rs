use anyhow::Context;
use clap::Parser;
use tic_tac_toe_terminal::{logging, Config, Console, Session, ABOUT};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    if config.about {
        print!("{}", ABOUT);
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock()).clear_screen(!config.no_clear);

    let mut session = Session::new(console, config.rng());
    let games = session.run().context("game stopped")?;
    log::info!("played {} games", games);
    Ok(())
}
