pub mod error;
pub mod item;
pub mod symlink;

pub use error::{ModelError, Result};
pub use item::Item;
pub use symlink::Symlink;
