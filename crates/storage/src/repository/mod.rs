pub mod events;
pub mod races;

pub use events::{EventRepository, EventStore};
pub use races::{RaceRepository, RaceStore};
