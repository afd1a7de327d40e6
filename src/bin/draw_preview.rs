//! Draw preview: eligible players, group draw and match schedules for one stage, as JSON.
//! Run with: cargo run --bin draw_preview -- stage_input.json
//! Input: {"stage": {...}, "players": [...], "prior": {...} | null}
//! Set DRAW_SEED to reproduce a preview; otherwise a random seed is used and printed.
//! Nothing is persisted: commit the printed preview, do not re-run the draw.

use race_tournament::{
    generate_matches_for_group, get_eligible_players, perform_draw, GameMatch, Group, Player,
    Stage, StageRecord, GROUP_SIZE,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Deserialize)]
struct PreviewInput {
    stage: Stage,
    players: Vec<Player>,
    #[serde(default)]
    prior: Option<StageRecord>,
}

#[derive(Debug, Serialize)]
struct PreviewGroup {
    name: String,
    players: Vec<Player>,
    /// Empty when the group is not exactly six players.
    matches: Vec<GameMatch>,
}

#[derive(Debug, Serialize)]
struct Preview {
    stage: String,
    seed: u64,
    eligible_players: usize,
    groups: Vec<PreviewGroup>,
}

fn draw_seed() -> u64 {
    std::env::var("DRAW_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random)
}

fn build_preview(input: PreviewInput, seed: u64) -> Result<Preview, Box<dyn Error>> {
    input.stage.config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let eligible = get_eligible_players(&input.stage, &input.players, input.prior.as_ref())?;
    if eligible.is_empty() {
        return Err(format!("No eligible players for {}", input.stage.name).into());
    }
    let draw = perform_draw(&eligible, input.stage.config.group_count, &mut rng)?;

    let mut groups = Vec::with_capacity(draw.len());
    for drawn in draw.groups {
        let ids = drawn.players.iter().map(|p| p.id).collect();
        let group = Group::new(input.stage.id, drawn.name.clone(), ids);
        let matches = if group.player_ids.len() == GROUP_SIZE {
            generate_matches_for_group(&group, &mut rng)?
        } else {
            log::warn!(
                "{} has {} players, no schedule generated",
                group.name,
                group.player_ids.len()
            );
            Vec::new()
        };
        groups.push(PreviewGroup {
            name: drawn.name,
            players: drawn.players,
            matches,
        });
    }

    Ok(Preview {
        stage: input.stage.name,
        seed,
        eligible_players: eligible.len(),
        groups,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: draw_preview <stage_input.json>")?;
    let raw = std::fs::read_to_string(&path)?;
    let input: PreviewInput = serde_json::from_str(&raw)?;

    let seed = draw_seed();
    log::info!("Previewing {} from {} (seed {})", input.stage.name, path, seed);
    let preview = build_preview(input, seed)?;

    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}
