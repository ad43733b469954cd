//! Continuous reel sound targets, recomputed once per frame.

use glam::Vec3;

use tether_core::config::FeedbackConfig;
use tether_core::state::ReelAudio;
use tether_core::types::remap_clamped;
use tether_rules::tether::Tether;

/// Pitch follows body speed, volume follows line length. Silent while idle.
pub fn reel_audio(
    tether: &Tether,
    body_velocity: Vec3,
    config: &FeedbackConfig,
    max_range: f32,
) -> ReelAudio {
    let Some(anchor) = tether.anchor() else {
        return ReelAudio::default();
    };
    let line_length = if tether.is_attached() {
        tether.origin.distance(anchor)
    } else {
        tether.origin.distance(tether.tip)
    };
    ReelAudio {
        pitch: remap_clamped(
            body_velocity.length(),
            0.0,
            config.audio_speed_ref,
            config.reel_pitch_min,
            config.reel_pitch_max,
        ),
        volume: remap_clamped(
            line_length,
            0.0,
            max_range,
            config.reel_volume_min,
            config.reel_volume_max,
        ),
    }
}
