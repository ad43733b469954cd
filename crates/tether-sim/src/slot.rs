//! Tether slot: a tether plus the handles of the entities it owns.
//!
//! Stored in `TraversalEngine`'s fixed pair, NOT as ECS entities.

use glam::Vec3;

use tether_core::types::TetherSide;
use tether_rules::tether::Tether;

#[derive(Debug, Clone)]
pub struct TetherSlot {
    pub tether: Tether,
    /// `ElasticLink` entity while attached.
    pub link: Option<hecs::Entity>,
    /// `AttachMarker` entity while attached.
    pub marker: Option<hecs::Entity>,
}

impl TetherSlot {
    pub fn new(side: TetherSide) -> Self {
        Self {
            tether: Tether::new(side),
            link: None,
            marker: None,
        }
    }
}

/// Mean anchor of the attached tethers, if any.
pub fn hooked_anchor(slots: &[TetherSlot; 2]) -> Option<Vec3> {
    let (sum, count) = slots
        .iter()
        .filter_map(|slot| slot.tether.attachment())
        .fold((Vec3::ZERO, 0u8), |(sum, count), a| (sum + a.anchor, count + 1));
    (count > 0).then(|| sum / f32::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_rules::tether::{Attachment, TetherState};

    fn attach(slot: &mut TetherSlot, anchor: Vec3) {
        slot.tether.state = TetherState::Attached(Attachment {
            anchor,
            durability_remaining: 1.0,
            max_length: 10.0,
        });
    }

    #[test]
    fn test_hooked_anchor_averages_attached_only() {
        let mut slots = [
            TetherSlot::new(TetherSide::Left),
            TetherSlot::new(TetherSide::Right),
        ];
        assert_eq!(hooked_anchor(&slots), None);

        attach(&mut slots[1], Vec3::new(4.0, 10.0, 20.0));
        assert_eq!(hooked_anchor(&slots), Some(Vec3::new(4.0, 10.0, 20.0)));

        attach(&mut slots[0], Vec3::new(-4.0, 20.0, 20.0));
        assert_eq!(hooked_anchor(&slots), Some(Vec3::new(0.0, 15.0, 20.0)));
    }
}
