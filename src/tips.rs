//! The tip bar's content: a fixed rotation of productivity tips, one of
//! which is shown on demand, plus the greeting used at startup.

use std::time::Duration;

/// The fixed tip rotation.
pub const TIPS: [&str; 6] = [
    "Take three deep breaths and focus on the first task.",
    "Work in 25-minute blocks to hold your focus.",
    "Before the day ends, write down one idea for tomorrow.",
    "Celebrate a small win: take 30 seconds to acknowledge it.",
    "Clear your workspace; good ideas need room.",
    "Walk for five minutes to recharge your creative energy.",
];

/// Shown instead of a tip when saved tasks are found at startup.
pub const GREETING: &str = "Excellent, you have a plan ready to move on.";

/// How long the tip action stays disabled after showing a tip.
pub const TIP_COOLDOWN: Duration = Duration::from_millis(1200);

/// Select the tip for a uniform roll in `[0, 1)`: index is
/// `floor(roll * 6)`. Rolls at or above 1.0 clamp to the last entry
/// rather than indexing out of bounds.
pub fn tip_at(roll: f64) -> &'static str {
    let idx = ((roll * TIPS.len() as f64) as usize).min(TIPS.len() - 1);
    TIPS[idx]
}

/// A uniform roll in `[0, 1)` from the OS entropy source. An unavailable
/// entropy source degrades to always showing the first tip.
pub fn random_roll() -> f64 {
    let mut bytes = [0u8; 8];
    if getrandom::fill(&mut bytes).is_err() {
        return 0.0;
    }
    // Top 53 bits of the draw, scaled into the f64 mantissa range
    let x = u64::from_le_bytes(bytes) >> 11;
    x as f64 / (1u64 << 53) as f64
}

/// Pick a random tip.
pub fn random_tip() -> &'static str {
    tip_at(random_roll())
}
