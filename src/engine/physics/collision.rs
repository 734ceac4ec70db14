use rapier2d::prelude::*;

use crate::game::player::LayerMask;

/// Collision layers used by the level and the player
///
/// Ground and walls are separate layers so that brushing a wall never
/// counts as standing on something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// Player characters
    Player = 0b0000_0010,

    /// Walkable surfaces (floors, platforms)
    Ground = 0b0000_0100,

    /// Solid but not walkable (side walls, ceilings)
    Wall = 0b0000_1000,

    /// Sensors (trigger zones, etc.) - don't cause physical collision
    Sensor = 0b0001_0000,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Players stand on ground, bump walls and trip sensors, but pass through each other
            CollisionGroups::Player => Group::from_bits_truncate(
                CollisionGroups::Ground as u32
                    | CollisionGroups::Wall as u32
                    | CollisionGroups::Sensor as u32
                    | CollisionGroups::Default as u32,
            ),

            // Level geometry doesn't collide with itself
            CollisionGroups::Ground | CollisionGroups::Wall => Group::from_bits_truncate(
                CollisionGroups::Player as u32 | CollisionGroups::Default as u32,
            ),

            CollisionGroups::Sensor | CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}

impl From<CollisionGroups> for LayerMask {
    fn from(group: CollisionGroups) -> Self {
        LayerMask::new(group as u32)
    }
}

/// Rapier group bits for a layer mask
pub fn mask_to_group(mask: LayerMask) -> Group {
    Group::from_bits_truncate(mask.bits())
}
