//! FactorySphere Core
//!
//! Platform-agnostic logic for the FactorySphere control-center dashboard.
//! This crate provides the deterministic mock telemetry generator, the
//! station/pod registry, the grid layout assignment and the role-based
//! access resolver without any UI or browser dependencies.

pub mod access;
pub mod layout;
pub mod numbers;
pub mod registry;
pub mod seed;
pub mod session;
pub mod telemetry;

// Re-export commonly used types
pub use access::{
    NAV_ITEMS, NavItem, Page, Role, Subject, first_allowed_page, nav_items_for, normalize_pages,
    role_can_access,
};
pub use layout::{GRID_COLS, Tile, tile_for_index};
pub use registry::{
    Area, Pod, PodSpec, Registry, RegistryError, Station, StationSpec, normalize_name, slugify_id,
};
pub use seed::{SeededStream, hash_identity};
pub use session::{
    EMAIL_KEY, MemoryStore, ROLE_KEY, Session, SessionStore, login, logout, read_session,
};
pub use telemetry::{
    Counters, Shift, ShiftTotals, StationKpis, Status, UnitSnapshot, mock_kpis_for_station,
    plant_units,
};
