//! Collision categories and the bit masks handed to the physics world.

use flap_engine::BodyMasks;

/// What a body is, for contact filtering and resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Bird,
    Obstacle,
    ScoreTrigger,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Bird, Category::Obstacle, Category::ScoreTrigger];

    /// Bit value used on the physics side.
    pub const fn bits(self) -> u32 {
        match self {
            Category::Bird => 0b0001,
            Category::Obstacle => 0b0010,
            Category::ScoreTrigger => 0b0100,
        }
    }

    /// Inverse of [`Category::bits`]; `None` for anything but a single known bit.
    pub fn from_bits(bits: u32) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.bits() == bits)
    }

    /// Masks for a body of this category.
    ///
    /// The bird hears about obstacles and triggers but is only pushed by
    /// obstacles. Triggers never push anything.
    pub fn masks(self) -> BodyMasks {
        match self {
            Category::Bird => BodyMasks::category(self.bits())
                .with_contact(Category::Obstacle.bits() | Category::ScoreTrigger.bits())
                .with_collision(Category::Obstacle.bits()),
            Category::Obstacle => BodyMasks::category(self.bits())
                .with_collision(Category::Bird.bits()),
            Category::ScoreTrigger => BodyMasks::category(self.bits())
                .with_contact(Category::Bird.bits())
                .with_collision(0),
        }
    }
}
