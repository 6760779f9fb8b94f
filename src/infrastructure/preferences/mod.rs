//! Preferences infrastructure module

mod special_mode;
mod sqlite_store;

pub use special_mode::SpecialModeController;
pub use sqlite_store::SqlitePreferenceStore;
