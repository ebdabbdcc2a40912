pub mod event;
pub mod race;
pub mod status;

pub use event::Event;
pub use race::Race;
pub use status::Status;
