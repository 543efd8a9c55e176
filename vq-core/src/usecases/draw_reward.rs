use rand::Rng;

use crate::usecases::prelude::*;

/// Roulette-wheel selection over the active rewards of a spin wheel.
///
/// Each reward weighs `11 - rarity_level`, the draw is uniform in
/// `[1, total_weight]` and the first reward whose cumulative weight
/// reaches the draw wins; ties break by list order.
pub fn draw_reward<'a, R: Rng>(rewards: &'a [Reward], rng: &mut R) -> Option<&'a Reward> {
    let total_weight: u32 = rewards
        .iter()
        .map(|reward| reward.rarity.selection_weight())
        .sum();
    if total_weight == 0 {
        return None;
    }
    let draw = rng.gen_range(1..=total_weight);
    let mut cumulative = 0;
    rewards.iter().find(|reward| {
        cumulative += reward.rarity.selection_weight();
        cumulative >= draw
    })
}
