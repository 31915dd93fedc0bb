use std::collections::HashMap;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::analysis::shot_chart::{ChartOptions, ShotChart, build_shot_chart};
use crate::config::DEBUG_FLAGS;
use crate::domain::ShotRecord;
use crate::models::LeagueAverageTable;

/// One player's shots, copied out of the season log.
pub struct PlayerShots {
    pub player_id: u64,
    pub shots: Vec<ShotRecord>,
}

/// Split a season log by player, players in order of their first shot.
pub fn group_by_player(shots: &[ShotRecord]) -> Vec<PlayerShots> {
    let mut index: HashMap<u64, usize> = HashMap::new();
    let mut groups: Vec<PlayerShots> = Vec::new();
    for shot in shots {
        let slot = *index.entry(shot.player_id).or_insert_with(|| {
            groups.push(PlayerShots {
                player_id: shot.player_id,
                shots: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].shots.push(shot.clone());
    }
    groups
}

/// Build a chart for every player in the season. Players are independent, so
/// they run in parallel; results keep player order.
pub fn chart_every_player(
    shots: &[ShotRecord],
    league_average: Option<&LeagueAverageTable>,
    options: &ChartOptions,
) -> Vec<(u64, Result<ShotChart>)> {
    let players = group_by_player(shots);
    log::info!("Building shot charts for {} players", players.len());

    players
        .into_par_iter()
        .map(|player| {
            let chart = build_shot_chart(&player.shots, league_average, options)
                .with_context(|| format!("Player {}", player.player_id));
            if DEBUG_FLAGS.print_batch_progress {
                log::info!(
                    "Player {}: {} shots, ok = {}",
                    player.player_id,
                    player.shots.len(),
                    chart.is_ok()
                );
            }
            (player.player_id, chart)
        })
        .collect()
}
