use bitflags::bitflags;

use crate::state::SkillSlot;

bitflags! {
    /// Inputs held by one player during one tick.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Intents: u16 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const AURA = 1 << 4;
        const PUNCH = 1 << 5;
        const ENERGYBALL = 1 << 6;
        const SPECIAL = 1 << 7;
        const ULTIMATE = 1 << 8;

        const MOVEMENT = Self::UP.bits() | Self::DOWN.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl Intents {
    pub const fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Intents::UP,
            Direction::Down => Intents::DOWN,
            Direction::Left => Intents::LEFT,
            Direction::Right => Intents::RIGHT,
        }
    }

    pub const fn for_skill(slot: SkillSlot) -> Self {
        match slot {
            SkillSlot::Punch => Intents::PUNCH,
            SkillSlot::Energyball => Intents::ENERGYBALL,
            SkillSlot::Special => Intents::SPECIAL,
            SkillSlot::Ultimate => Intents::ULTIMATE,
        }
    }

    pub fn holds(&self, direction: Direction) -> bool {
        self.contains(Self::for_direction(direction))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Diagonal pairs in priority order; horizontal component first.
    pub const DIAGONALS: [(Direction, Direction); 4] = [
        (Direction::Left, Direction::Up),
        (Direction::Left, Direction::Down),
        (Direction::Right, Direction::Up),
        (Direction::Right, Direction::Down),
    ];

    /// Single directions in priority order.
    pub const SINGLES: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Unit vector in screen space (`y` grows downwards).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
