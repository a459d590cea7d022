pub mod constants;
pub mod curves;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod mailbox;
pub mod signals;

pub use constants::*;
pub use curves::*;
pub use engine::*;
pub use error::*;
pub use gesture::*;
pub use mailbox::*;
pub use signals::*;
