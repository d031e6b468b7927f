pub mod backup;
pub mod bundle;
pub mod error;
pub mod install;
pub mod io;
pub mod paths;
pub mod restore;
pub mod status;

pub use error::{KitError, Result};
