//! Slot spin easing.

use std::time::Duration;

use crate::timeline::REVEAL_DELAY;

/// Full passes through the filler before the final deceleration.
pub const SPIN_LOOPS: usize = 3;

/// Cubic ease-out on `[0, 1]`.
#[must_use]
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Filler index shown `elapsed` into a spin.
///
/// The walk covers `SPIN_LOOPS + 1` passes over the filler body, fast at first
/// and slowing down, and lands on the trailing wraparound entry once
/// `REVEAL_DELAY` has passed.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn spin_frame(elapsed: Duration, filler_len: usize) -> Option<usize> {
    if filler_len == 0 {
        return None;
    }
    let cycle = filler_len - 1;
    if cycle == 0 {
        return Some(0);
    }
    let total = cycle * (SPIN_LOOPS + 1);
    let t = elapsed.as_secs_f64() / REVEAL_DELAY.as_secs_f64();
    let step = (ease_out(t) * total as f64).floor() as usize;
    if step >= total {
        Some(filler_len - 1)
    } else {
        Some(step % cycle)
    }
}
