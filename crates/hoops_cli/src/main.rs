//! hoops CLI
//!
//! Snake-draft two lineups from the all-time pool and simulate the game.

mod prompt;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use hoops_core::data::{load_pool, player_pool};
use hoops_core::draft::{draft_sequential, ranked_by_position, DraftState};
use hoops_core::engine::{simulate_game, SimConfig};
use hoops_core::models::{Player, Position, Team};
use hoops_core::{render_final, simulate_game_json};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hoops", version)]
#[command(about = "All-time draft room and possession-by-possession game simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct SimArgs {
    /// Seed for the game (and draft options); random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON engine config; overrides HOOPS_SIM_CONFIG_PATH
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in tuning preset: realistic, shootout, grind
    #[arg(long)]
    preset: Option<String>,

    /// Play overtime while tied
    #[arg(long, default_value = "false")]
    overtime: bool,

    /// Player pool file (.json or .csv) replacing the built-in pool
    #[arg(long)]
    pool: Option<PathBuf>,

    #[arg(long, default_value = "Team A")]
    team_a: String,

    #[arg(long, default_value = "Team B")]
    team_b: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive snake draft, then simulate
    Draft {
        #[command(flatten)]
        sim: SimArgs,
    },

    /// Auto-draft both teams (Team A fills first) and simulate
    Auto {
        #[command(flatten)]
        sim: SimArgs,
    },

    /// List the pool, best overall first
    Pool {
        /// Only this position (PG, SG, SF, PF, C)
        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        pool: Option<PathBuf>,
    },

    /// Run a JSON game request and print the JSON response
    Json {
        /// Request file, or '-' for stdin
        #[arg(long)]
        input: String,

        /// Indent the response
        #[arg(long)]
        pretty: bool,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_default();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(sim: &SimArgs) -> Result<SimConfig> {
    let mut config = if let Some(path) = &sim.config {
        tracing::info!(path = %path.display(), "engine config from file");
        SimConfig::from_file(&path.to_string_lossy())
            .with_context(|| format!("loading config {}", path.display()))?
    } else if let Some(name) = &sim.preset {
        tracing::info!(preset = %name, "engine config from preset");
        SimConfig::from_preset(name).ok_or_else(|| anyhow!("unknown preset '{name}'"))?
    } else {
        SimConfig::from_env().context("loading config from HOOPS_SIM_CONFIG_PATH")?
    };
    if sim.overtime {
        config.game.overtime = true;
    }
    tracing::info!(overtime = config.game.overtime, periods = config.game.periods, "engine config ready");
    Ok(config)
}

fn load_players(path: Option<&PathBuf>) -> Result<Vec<Player>> {
    let players = match path {
        Some(path) => {
            load_pool(path).with_context(|| format!("loading pool {}", path.display()))?
        }
        None => player_pool(),
    };
    tracing::info!(players = players.len(), custom = path.is_some(), "player pool loaded");
    Ok(players)
}

fn play(team_a: &Team, team_b: &Team, seed: Option<u64>, config: &SimConfig) -> Result<()> {
    let result = simulate_game(team_a, team_b, seed, config)?;
    println!();
    print!("{}", render_final(&result, team_a, team_b));
    Ok(())
}

fn run_draft(sim: SimArgs) -> Result<()> {
    let config = load_config(&sim)?;
    let pool = load_players(sim.pool.as_ref())?;
    let mut rng = match sim.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    println!("All-Time Draft & Sim ({} players in pool)", pool.len());
    let mut draft = DraftState::with_names(pool, sim.team_a, sim.team_b);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    prompt::run_draft(&mut draft, &mut input, &mut out, &mut rng)?;

    let seed = match sim.seed {
        Some(seed) => Some(seed),
        None => prompt::ask_seed(&mut input, &mut out)?,
    };
    out.flush()?;
    let (team_a, team_b) = draft.into_teams()?;
    play(&team_a, &team_b, seed, &config)
}

fn run_auto(sim: SimArgs) -> Result<()> {
    let config = load_config(&sim)?;
    let mut pool = load_players(sim.pool.as_ref())?;
    let (team_a, team_b) = draft_sequential(&sim.team_a, &sim.team_b, &mut pool)?;
    for team in [&team_a, &team_b] {
        println!("{}:", team.name);
        for (pos, player) in Position::ALL.iter().zip(team.all_players()) {
            println!("  {pos:<2} {}", player.label());
        }
    }
    play(&team_a, &team_b, sim.seed, &config)
}

fn run_pool(position: Option<String>, path: Option<PathBuf>) -> Result<()> {
    let pool = load_players(path.as_ref())?;
    let positions = match position {
        Some(p) => vec![p.parse::<Position>()?],
        None => Position::ALL.to_vec(),
    };
    for pos in positions {
        println!("== {pos} ==");
        for p in ranked_by_position(pos, &pool) {
            println!("{:>6.1}  {}", p.overall(), p.label());
        }
    }
    Ok(())
}

fn format_response(response: &str, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(response.to_string());
    }
    let value: serde_json::Value = serde_json::from_str(response).context("parsing response")?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn run_json(input: &str, pretty: bool) -> Result<()> {
    let request = if input == "-" {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf).context("reading request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading request {input}"))?
    };
    let response = simulate_game_json(&request)?;
    println!("{}", format_response(&response, pretty)?);
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Draft { sim } => run_draft(sim),
        Commands::Auto { sim } => run_auto(sim),
        Commands::Pool { position, pool } => run_pool(position, pool),
        Commands::Json { input, pretty } => run_json(&input, pretty),
    }
}
