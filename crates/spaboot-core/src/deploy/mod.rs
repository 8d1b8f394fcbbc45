//! Bundle deployment.
//!
//! Copies the built static front-end bundle into the directory the API
//! project serves it from.

mod copy;
mod error;
mod plan;

pub use copy::{copy_dir, CopyReport};
pub use error::DeployError;
pub use plan::DeployPlan;
