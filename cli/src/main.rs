mod app;
mod commands;
mod render;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use puzzle2048_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use puzzle2048_common::logger::{self, LogTarget};
use puzzle2048_common::puzzle2048::{GameConfig, Puzzle2048GameState};
use puzzle2048_common::storage::BestScoreStore;
use puzzle2048_common::{SessionRng, log};

use app::App;
use render::Renderer;

const CONFIG_FILE: &str = "puzzle2048_config.yaml";

#[derive(Parser)]
#[command(name = "puzzle2048", about = "Slide and merge tiles to reach the target tile")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Replays the same game for the same seed.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    size: Option<usize>,

    #[arg(long)]
    target: Option<u32>,

    #[arg(long)]
    no_color: bool,

    /// Writes the current config to the config file and exits.
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Puzzle2048".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, LogTarget::Stderr);

    let config_manager: ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> =
        ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(target) = args.target {
        config.target_value = target;
    }
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config written to {}", args.config.display());
        return Ok(());
    }

    let mut rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!(
        "Starting {}x{} game, target {}, seed {}",
        config.board_size,
        config.board_size,
        config.target_value,
        rng.seed()
    );

    let best_scores = BestScoreStore::from_file(&config.best_score_file);
    let game = Puzzle2048GameState::from_config(&config, &mut rng);
    let mut app = App::new(game, &mut rng, &best_scores, Renderer::new(!args.no_color));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    app.run(stdin.lock(), &mut stdout)?;

    log!("Final score {}", app.game().score());
    Ok(())
}
