//! Role-based access resolution and navigation filtering.
//!
//! Roles and pages are closed enums with total parsing; unknown role input
//! degrades to the least-privileged `Operator` role rather than failing
//! open or locking the user out silently.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    PlantManager,
    ProductionManager,
    MaintenanceManager,
    QualityManager,
    EngineeringManager,
    Supervisor,
    TeamLeader,
    Operator,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::PlantManager,
        Role::ProductionManager,
        Role::MaintenanceManager,
        Role::QualityManager,
        Role::EngineeringManager,
        Role::Supervisor,
        Role::TeamLeader,
        Role::Operator,
    ];

    /// Safe default for unknown or missing roles.
    pub const DEFAULT: Role = Role::Operator;

    /// Canonical role key as stored in the session.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Role::PlantManager => "PlantManager",
            Role::ProductionManager => "ProductionManager",
            Role::MaintenanceManager => "MaintenanceManager",
            Role::QualityManager => "QualityManager",
            Role::EngineeringManager => "EngineeringManager",
            Role::Supervisor => "Supervisor",
            Role::TeamLeader => "TeamLeader",
            Role::Operator => "Operator",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Role::PlantManager => "Plant Manager",
            Role::ProductionManager => "Production Manager",
            Role::MaintenanceManager => "Maintenance Manager",
            Role::QualityManager => "Quality Manager",
            Role::EngineeringManager => "Engineering Manager",
            Role::Supervisor => "Supervisor",
            Role::TeamLeader => "Team Leader",
            Role::Operator => "Operator",
        }
    }

    /// Total parse of arbitrary role spellings.
    ///
    /// Tries the exact key first, then a case/punctuation-insensitive fold,
    /// then the fold with a redundant `ROLE` prefix stripped. `None` means
    /// the input names no known role at all.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Role> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(role) = Self::ALL.into_iter().find(|r| r.key() == trimmed) {
            return Some(role);
        }

        let folded = fold_role_key(trimmed);
        let lookup = |needle: &str| {
            Self::ALL
                .into_iter()
                .find(|r| fold_role_key(r.key()) == needle)
        };
        if let Some(role) = lookup(&folded) {
            return Some(role);
        }
        folded
            .strip_prefix("ROLE")
            .filter(|rest| !rest.is_empty())
            .and_then(lookup)
    }

    /// Parse with the safe default for unknown input.
    #[must_use]
    pub fn resolve(raw: &str) -> Role {
        Self::parse(raw).unwrap_or(Self::DEFAULT)
    }
}

/// Uppercase ASCII alphanumerics only; drops case and punctuation variance.
fn fold_role_key(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Dashboard,
    Devices,
    Alarms,
    Downtime,
    Analytics,
    Cameras,
    Reports,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Devices,
        Page::Alarms,
        Page::Downtime,
        Page::Analytics,
        Page::Cameras,
        Page::Reports,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Devices => "devices",
            Page::Alarms => "alarms",
            Page::Downtime => "downtime",
            Page::Analytics => "analytics",
            Page::Cameras => "cameras",
            Page::Reports => "reports",
        }
    }

    /// Empty or unknown keys parse to `None` and are therefore denied.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Page> {
        let key = raw.trim();
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Static role allow-list per page. Dashboard is universally allowed.
const fn allowed_roles(page: Page) -> &'static [Role] {
    match page {
        Page::Dashboard => &Role::ALL,
        Page::Devices => &[
            Role::PlantManager,
            Role::ProductionManager,
            Role::MaintenanceManager,
            Role::QualityManager,
            Role::EngineeringManager,
            Role::Supervisor,
        ],
        Page::Alarms => &[
            Role::PlantManager,
            Role::MaintenanceManager,
            Role::EngineeringManager,
            Role::Supervisor,
            Role::TeamLeader,
        ],
        Page::Downtime => &[
            Role::PlantManager,
            Role::ProductionManager,
            Role::MaintenanceManager,
            Role::Supervisor,
            Role::TeamLeader,
        ],
        Page::Analytics => &[
            Role::PlantManager,
            Role::ProductionManager,
            Role::QualityManager,
            Role::EngineeringManager,
        ],
        Page::Cameras => &[
            Role::PlantManager,
            Role::EngineeringManager,
            Role::Supervisor,
        ],
        Page::Reports => &[
            Role::PlantManager,
            Role::ProductionManager,
            Role::QualityManager,
        ],
    }
}

/// Table lookup: may this role see this page?
#[must_use]
pub fn role_can_access(role: Role, page: Page) -> bool {
    allowed_roles(page).contains(&role)
}

/// Drop empty entries and surrounding whitespace from an explicit page list.
#[must_use]
pub fn normalize_pages<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The access-relevant view of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub authenticated: bool,
    pub role: Role,
    /// Explicit page keys carried by the user record, if any. Preferred over
    /// the static table unless empty or the `["dashboard"]` placeholder.
    pub pages: Vec<String>,
}

impl Subject {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            authenticated: false,
            role: Role::DEFAULT,
            pages: Vec::new(),
        }
    }

    #[must_use]
    pub const fn authenticated(role: Role) -> Self {
        Self {
            authenticated: true,
            role,
            pages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pages<S: AsRef<str>>(role: Role, pages: &[S]) -> Self {
        Self {
            authenticated: true,
            role,
            pages: normalize_pages(pages),
        }
    }

    /// The explicit page list, unless it is the incomplete placeholder.
    fn explicit_pages(&self) -> Option<&[String]> {
        if self.pages.is_empty() {
            return None;
        }
        // A lone "dashboard" entry is a placeholder list; trusting it would
        // lock the user out of everything else.
        if self.pages.len() == 1 && self.pages[0] == Page::Dashboard.key() {
            return None;
        }
        Some(&self.pages)
    }

    #[must_use]
    pub fn can_access(&self, page: Page) -> bool {
        if !self.authenticated {
            return false;
        }
        if let Some(pages) = self.explicit_pages() {
            return pages.iter().any(|key| key == page.key());
        }
        role_can_access(self.role, page)
    }

    /// String-key variant; empty or malformed keys are denied.
    #[must_use]
    pub fn can_access_key(&self, key: &str) -> bool {
        Page::parse(key).is_some_and(|page| self.can_access(page))
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// One sidebar entry in the fixed menu definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub path: &'static str,
    pub live_badge: bool,
}

/// Full menu, in declared order. Filtering never resorts.
pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        page: Page::Dashboard,
        label: "Dashboard",
        path: "/dashboard",
        live_badge: true,
    },
    NavItem {
        page: Page::Devices,
        label: "Stations & Devices",
        path: "/devices",
        live_badge: false,
    },
    NavItem {
        page: Page::Alarms,
        label: "Live Alarms",
        path: "/alarms",
        live_badge: false,
    },
    NavItem {
        page: Page::Downtime,
        label: "Downtime & Maintenance",
        path: "/downtime",
        live_badge: false,
    },
    NavItem {
        page: Page::Analytics,
        label: "Analytics",
        path: "/analytics",
        live_badge: false,
    },
    NavItem {
        page: Page::Cameras,
        label: "Cameras",
        path: "/cameras",
        live_badge: false,
    },
    NavItem {
        page: Page::Reports,
        label: "Reports",
        path: "/reports",
        live_badge: false,
    },
];

/// Menu entries visible to the subject, preserving declared order.
#[must_use]
pub fn nav_items_for(subject: &Subject) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|item| subject.can_access(item.page))
        .collect()
}

/// First page in menu order the subject may see, for post-login redirects.
#[must_use]
pub fn first_allowed_page(subject: &Subject) -> Option<Page> {
    NAV_ITEMS
        .iter()
        .find(|item| subject.can_access(item.page))
        .map(|item| item.page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_spelling_variants_resolve_to_one_role() {
        for raw in [
            "PlantManager",
            "plant_manager",
            "PLANT-MANAGER",
            "ROLE_PLANT_MANAGER",
            "  Plant Manager  ",
        ] {
            assert_eq!(Role::parse(raw), Some(Role::PlantManager), "raw={raw:?}");
        }
    }

    #[test]
    fn unknown_roles_resolve_to_operator() {
        assert_eq!(Role::parse("intern"), None);
        assert_eq!(Role::resolve("intern"), Role::Operator);
        assert_eq!(Role::resolve(""), Role::Operator);
        assert_eq!(Role::resolve("ROLE_"), Role::Operator);
    }

    #[test]
    fn role_prefix_is_stripped_only_when_redundant() {
        assert_eq!(Role::parse("ROLE_SUPERVISOR"), Some(Role::Supervisor));
        assert_eq!(Role::parse("role-team-leader"), Some(Role::TeamLeader));
        // "ROLE" alone is not a role
        assert_eq!(Role::parse("ROLE"), None);
    }

    #[test]
    fn dashboard_is_universally_allowed() {
        for role in Role::ALL {
            assert!(role_can_access(role, Page::Dashboard), "role={role:?}");
        }
    }

    #[test]
    fn unauthenticated_subject_is_denied_everything() {
        let anon = Subject::anonymous();
        for page in Page::ALL {
            assert!(!anon.can_access(page), "page={page:?}");
        }
        assert!(!anon.can_access_key("dashboard"));
    }

    #[test]
    fn malformed_page_keys_are_denied() {
        let subject = Subject::authenticated(Role::PlantManager);
        assert!(!subject.can_access_key(""));
        assert!(!subject.can_access_key("   "));
        assert!(!subject.can_access_key("settings"));
    }

    #[test]
    fn supervisor_sees_devices_in_declared_order() {
        let subject = Subject::authenticated(Role::Supervisor);
        assert!(subject.can_access(Page::Devices));

        let items = nav_items_for(&subject);
        let keys: Vec<&str> = items.iter().map(|i| i.page.key()).collect();
        assert_eq!(
            keys,
            vec!["dashboard", "devices", "alarms", "downtime", "cameras"]
        );
    }

    #[test]
    fn team_leader_has_no_devices_entry() {
        let subject = Subject::authenticated(Role::TeamLeader);
        assert!(!subject.can_access(Page::Devices));
        assert!(
            nav_items_for(&subject)
                .iter()
                .all(|i| i.page != Page::Devices)
        );
    }

    #[test]
    fn explicit_pages_override_the_table() {
        let subject = Subject::with_pages(Role::TeamLeader, &["dashboard", "devices"]);
        assert!(subject.can_access(Page::Devices));
        // table would have allowed downtime, explicit list does not
        assert!(!subject.can_access(Page::Downtime));
    }

    #[test]
    fn lone_dashboard_list_is_treated_as_placeholder() {
        let subject = Subject::with_pages(Role::Supervisor, &["dashboard"]);
        // falls back to the table instead of locking everything else out
        assert!(subject.can_access(Page::Devices));
        assert!(subject.can_access(Page::Dashboard));
    }

    #[test]
    fn first_allowed_page_follows_menu_order() {
        let supervisor = Subject::authenticated(Role::Supervisor);
        assert_eq!(first_allowed_page(&supervisor), Some(Page::Dashboard));

        let devices_only = Subject::with_pages(Role::Operator, &["devices", "alarms"]);
        assert_eq!(first_allowed_page(&devices_only), Some(Page::Devices));

        let anon = Subject::anonymous();
        assert_eq!(first_allowed_page(&anon), None);
    }

    #[test]
    fn operator_default_is_dashboard_only() {
        let operator = Subject::authenticated(Role::Operator);
        let items = nav_items_for(&operator);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].page, Page::Dashboard);
    }
}
