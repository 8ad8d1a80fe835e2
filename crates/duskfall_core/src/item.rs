#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Flashlight,
    Phone,
    Doll,
}

/// Optional behaviors an item kind supports. A missing capability is a
/// normal condition, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub usable: bool,
    pub alternate_usable: bool,
    pub pickupable: bool,
}

impl ItemKind {
    pub fn capabilities(self) -> Capabilities {
        match self {
            ItemKind::Flashlight => Capabilities {
                usable: true,
                alternate_usable: false,
                pickupable: true,
            },
            ItemKind::Phone => Capabilities {
                usable: true,
                alternate_usable: true,
                pickupable: true,
            },
            ItemKind::Doll => Capabilities {
                usable: false,
                alternate_usable: false,
                pickupable: true,
            },
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ItemKind::Flashlight => "Flashlight",
            ItemKind::Phone => "Phone",
            ItemKind::Doll => "Doll",
        }
    }

    /// Returns RGBA color as [r, g, b, a] in sRGB space.
    pub fn color_rgba(self) -> [f32; 4] {
        match self {
            ItemKind::Flashlight => [0.85, 0.78, 0.35, 1.0],
            ItemKind::Phone => [0.25, 0.55, 0.85, 1.0],
            ItemKind::Doll => [0.70, 0.30, 0.30, 1.0],
        }
    }
}

/// Gate for moving a probe-struck item into the inventory: the kind must
/// support pickup, the instance must not be pinned down, and an item
/// already in hand cannot be taken a second time. A refusal is a normal
/// negative result, never an error.
pub fn pickup_allowed(caps: Capabilities, can_pick_up: bool, already_held: bool) -> bool {
    caps.pickupable && can_pick_up && !already_held
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_can_be_picked_up() {
        for kind in [ItemKind::Flashlight, ItemKind::Phone, ItemKind::Doll] {
            assert!(kind.capabilities().pickupable);
        }
    }

    #[test]
    fn only_the_phone_supports_alternate_use() {
        assert!(!ItemKind::Flashlight.capabilities().alternate_usable);
        assert!(ItemKind::Phone.capabilities().alternate_usable);
        assert!(!ItemKind::Doll.capabilities().alternate_usable);
    }

    #[test]
    fn the_doll_is_inert() {
        let caps = ItemKind::Doll.capabilities();
        assert!(!caps.usable);
        assert!(!caps.alternate_usable);
    }

    #[test]
    fn pickup_needs_the_kind_capability() {
        let caps = Capabilities {
            pickupable: false,
            ..Capabilities::default()
        };
        assert!(!pickup_allowed(caps, true, false));
    }

    #[test]
    fn pinned_instances_refuse_pickup() {
        assert!(pickup_allowed(ItemKind::Doll.capabilities(), true, false));
        assert!(!pickup_allowed(ItemKind::Doll.capabilities(), false, false));
    }

    #[test]
    fn held_items_cannot_be_taken_twice() {
        assert!(!pickup_allowed(ItemKind::Flashlight.capabilities(), true, true));
    }
}
