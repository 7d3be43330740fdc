use std::{env, fs, io};

use anyhow::{Context, Result, anyhow};
use error::describe;
use floor_crawler::{ConsoleRenderer, Game, GameConfig, InputSource, LineInput};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<GameConfig> {
    let Some(path) = env::args().nth(1) else {
        return Ok(GameConfig::default());
    };
    let text =
        fs::read_to_string(&path).with_context(|| format!("Failed to read config file {path}"))?;
    GameConfig::from_json(&text).map_err(|e| anyhow!(describe(&e)))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config()?;
    let mut game = Game::with_config(config).map_err(|e| anyhow!(describe(&e)))?;
    info!(seed = game.seed(), "starting");

    game.attach_presenter(Box::new(ConsoleRenderer::new(io::stdout())));
    game.start_new_game();

    let mut input = LineInput::new(io::stdin().lock());
    while let Some(label) = input.next_label()? {
        if label.eq_ignore_ascii_case("quit") {
            break;
        }
        game.accept_button_press(&label);
    }

    println!("Goodbye.");
    Ok(())
}
