mod categories;
mod message;

pub use categories::*;
pub use message::*;
