// DataBudget - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "DataBudget";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "DataBudget";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Offers
// =============================================================================

/// Currency suffix appended to every displayed price.
pub const CURRENCY: &str = "FCFA";

/// Validity value used by offers whose validity period is not known.
pub const UNKNOWN_VALIDITY: &str = "Unknown";

/// Message displayed in place of the results list when no offer fits.
pub const NO_OFFERS_MESSAGE: &str = "Aucune offre disponible.";

/// Marker shown on the cheapest matching offer.
pub const BEST_VALUE_LABEL: &str = "Meilleur choix";

// =============================================================================
// Quick budgets
// =============================================================================

/// Budget shortcuts shown next to the search field (FCFA).
pub const DEFAULT_QUICK_BUDGETS: &[i64] = &[500, 1_000, 2_000, 5_000];

/// Maximum number of quick-budget buttons accepted from config.toml.
pub const MAX_QUICK_BUDGETS: usize = 8;

/// Smallest quick-budget value accepted from config.toml.
pub const MIN_QUICK_BUDGET: i64 = 1;

/// Largest quick-budget value accepted from config.toml.
pub const MAX_QUICK_BUDGET: i64 = 1_000_000;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Storage and configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Storage slot holding the serialised offer collection (in the data directory).
pub const OFFERS_FILE_NAME: &str = "offers.json";
