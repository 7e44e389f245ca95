pub mod handler;
pub mod intent;

pub use handler::translate_event;
pub use intent::Intent;
