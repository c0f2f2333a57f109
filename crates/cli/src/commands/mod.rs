pub mod combos;
pub mod inventory;
pub mod process;
pub mod resolve;
