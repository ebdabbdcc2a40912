pub mod event;
pub mod race;
