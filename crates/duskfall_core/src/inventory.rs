/// Ordered collection of held item handles with a single active slot.
///
/// `H` is an opaque handle to the engine-side entity; the inventory only
/// needs identity comparison on it.
#[derive(Debug, Clone)]
pub struct Inventory<H: Copy + PartialEq> {
    items: Vec<H>,
    active: Option<usize>,
}

impl<H: Copy + PartialEq> Default for Inventory<H> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            active: None,
        }
    }
}

impl<H: Copy + PartialEq> Inventory<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[H] {
        &self.items
    }

    pub fn active_slot(&self) -> Option<usize> {
        self.active
    }

    pub fn active_item(&self) -> Option<H> {
        self.active.map(|slot| self.items[slot])
    }

    pub fn contains(&self, item: H) -> bool {
        self.items.iter().any(|&held| held == item)
    }

    /// Make `slot` the active slot. Out-of-range slots are refused and leave
    /// the current selection untouched.
    pub fn set_active(&mut self, slot: usize) -> bool {
        if slot >= self.items.len() {
            return false;
        }
        self.active = Some(slot);
        true
    }

    /// Append `item` and make it the active slot. Returns the slot it landed
    /// in.
    pub fn pick_up(&mut self, item: H) -> usize {
        self.items.push(item);
        let slot = self.items.len() - 1;
        self.active = Some(slot);
        slot
    }

    /// Remove `item` from the sequence. Removing the active item hands the
    /// selection to the last remaining slot; removing the only item clears
    /// it.
    pub fn remove(&mut self, item: H) -> bool {
        let Some(slot) = self.items.iter().position(|&held| held == item) else {
            return false;
        };
        self.items.remove(slot);

        self.active = match self.active {
            Some(active) if active == slot => {
                if self.items.is_empty() {
                    None
                } else {
                    Some(self.items.len() - 1)
                }
            }
            // The removed slot sat below the active one, so the active item
            // shifted down by one.
            Some(active) if active > slot => Some(active - 1),
            other => other,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_active_accepts_valid_slots_only() {
        let mut inv: Inventory<u32> = Inventory::new();
        inv.pick_up(7);
        inv.pick_up(8);

        assert!(inv.set_active(0));
        assert_eq!(inv.active_slot(), Some(0));

        assert!(!inv.set_active(2));
        assert_eq!(inv.active_slot(), Some(0));

        assert!(!Inventory::<u32>::new().set_active(0));
    }

    #[test]
    fn pick_up_appends_and_activates() {
        let mut inv = Inventory::new();
        assert_eq!(inv.pick_up(7), 0);
        assert_eq!(inv.pick_up(8), 1);
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.active_item(), Some(8));
    }

    #[test]
    fn removing_active_item_reactivates_last_slot() {
        let mut inv = Inventory::new();
        inv.pick_up(7);
        inv.pick_up(8);
        inv.pick_up(9);
        inv.set_active(1);

        assert!(inv.remove(8));
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.active_slot(), Some(1));
        assert_eq!(inv.active_item(), Some(9));
    }

    #[test]
    fn removing_sole_item_clears_selection() {
        let mut inv = Inventory::new();
        inv.pick_up(7);

        assert!(inv.remove(7));
        assert!(inv.is_empty());
        assert_eq!(inv.active_slot(), None);
        assert_eq!(inv.active_item(), None);
    }

    #[test]
    fn removing_below_active_keeps_the_same_item_active() {
        let mut inv = Inventory::new();
        inv.pick_up(7);
        inv.pick_up(8);
        inv.pick_up(9);

        assert!(inv.remove(7));
        assert_eq!(inv.active_slot(), Some(1));
        assert_eq!(inv.active_item(), Some(9));
    }

    #[test]
    fn removing_unknown_item_is_refused() {
        let mut inv = Inventory::new();
        inv.pick_up(7);

        assert!(!inv.remove(9));
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.active_item(), Some(7));
    }
}
