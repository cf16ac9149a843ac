pub use color::{Channel, Color};
pub use error::EngineError;
pub use progress::ProgressEngine;

mod color;
mod error;
mod progress;
pub mod stops;
