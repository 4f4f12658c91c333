pub mod error;
pub mod types;

pub use error::{Result, TacticalError};
pub use types::{GridPosition, GroupId, StackId};
