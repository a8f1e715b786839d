mod loader;

pub use loader::{LoadError, load_profile_from_json};
