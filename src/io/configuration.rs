//! Storage keys, rating scale and runtime configuration defaults

// Storage keys, one value per key
/// Key holding the rated history list
pub const HISTORY_KEY: &str = "history";
/// Key holding the active word selection
pub const SELECTION_KEY: &str = "selection";
/// Key holding the generated but not yet rated combination
pub const CURRENT_KEY: &str = "current";

/// Highest rating a combination can receive
pub const MAX_RATING: u8 = 10;

/// Delay between revealed characters of a new combination
pub const TYPEWRITER_DELAY_MS: u64 = 80;

// Output settings
/// File name used when exporting history without an explicit path
pub const EXPORT_FILE_NAME: &str = "historique_combinaisons.txt";
/// File name of the persistent key-value store
pub const STORE_FILE_NAME: &str = "store.json";

// Used to resolve the platform data directory
/// Application qualifier
pub const APP_QUALIFIER: &str = "org";
/// Application organization
pub const APP_ORGANIZATION: &str = "provoqemois";
/// Application name
pub const APP_NAME: &str = "quantum-poetry";
