pub mod error;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod table;

pub use error::{ErrorKind, Result, ToolError};
