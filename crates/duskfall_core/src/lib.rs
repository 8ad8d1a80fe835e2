pub mod inventory;
pub mod item;
pub mod movement;
pub mod placement;
pub mod trace;
