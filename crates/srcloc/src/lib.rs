//! Source locations: which file a piece of text came from and the exact span
//! it covers, with the orderings and containment checks used to sort,
//! deduplicate and relate them.

mod error;
mod file_key;
mod location;
mod position;

pub use error::{LocError, Result};
pub use file_key::{compare_source, FileKey, BUILTINS_LABEL};
pub use location::{Containment, Location};
pub use position::Position;
