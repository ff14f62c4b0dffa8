pub mod sidebar;
pub mod status_chip;
pub mod topbar;
