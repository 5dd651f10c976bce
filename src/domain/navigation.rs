//! Role-filtered navigation, modelled as plain data plus a pure filter
//! instead of per-screen role switches.

use super::entities::UserRole;

/// Screens the sidebar can point at. The router maps these onto routes; the
/// domain layer only knows the allow-lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    Users,
    FuelSettings,
    Trucks,
    Orders,
    PlaceOrder,
    Inventory,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavEntry {
    pub title: &'static str,
    pub target: NavTarget,
    pub roles: &'static [UserRole],
}

const ALL_ROLES: &[UserRole] = &UserRole::ALL;

/// The complete menu, defined once. Order matters: it is the sidebar order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        title: "Dashboard",
        target: NavTarget::Dashboard,
        roles: ALL_ROLES,
    },
    NavEntry {
        title: "User Management",
        target: NavTarget::Users,
        roles: &[UserRole::Admin, UserRole::Gso],
    },
    NavEntry {
        title: "Fuel Settings",
        target: NavTarget::FuelSettings,
        roles: &[UserRole::Admin, UserRole::OfficeStaff],
    },
    NavEntry {
        title: "Truck Records",
        target: NavTarget::Trucks,
        roles: &[UserRole::Admin, UserRole::DepotStaff],
    },
    NavEntry {
        title: "Orders",
        target: NavTarget::Orders,
        roles: ALL_ROLES,
    },
    NavEntry {
        title: "Place Order",
        target: NavTarget::PlaceOrder,
        roles: &[UserRole::Gso, UserRole::GsoStaff],
    },
    NavEntry {
        title: "Inventory",
        target: NavTarget::Inventory,
        roles: &[UserRole::Admin, UserRole::DepotStaff],
    },
];

/// Menu entries visible to the given role, in sidebar order.
pub fn entries_for_role(role: UserRole) -> Vec<&'static NavEntry> {
    NAV_ENTRIES
        .iter()
        .filter(|entry| entry.roles.contains(&role))
        .collect()
}

/// Whether a role may open a screen at all; the shell uses this as the
/// route guard so deep links obey the same allow-lists as the menu.
pub fn role_allows(role: UserRole, target: NavTarget) -> bool {
    NAV_ENTRIES
        .iter()
        .any(|entry| entry.target == target && entry.roles.contains(&role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_sees_dashboard_and_orders() {
        for role in UserRole::ALL {
            let targets: Vec<NavTarget> = entries_for_role(role)
                .iter()
                .map(|entry| entry.target)
                .collect();
            assert!(targets.contains(&NavTarget::Dashboard), "{role:?}");
            assert!(targets.contains(&NavTarget::Orders), "{role:?}");
        }
    }

    #[test]
    fn menu_matches_role_allow_lists() {
        assert!(role_allows(UserRole::Admin, NavTarget::FuelSettings));
        assert!(role_allows(UserRole::OfficeStaff, NavTarget::FuelSettings));
        assert!(!role_allows(UserRole::DepotStaff, NavTarget::FuelSettings));
        assert!(!role_allows(UserRole::GsoStaff, NavTarget::Users));
        assert!(role_allows(UserRole::Gso, NavTarget::Users));
        assert!(role_allows(UserRole::DepotStaff, NavTarget::Inventory));
        assert!(!role_allows(UserRole::OfficeStaff, NavTarget::Inventory));
    }

    #[test]
    fn only_station_roles_can_place_orders() {
        for role in UserRole::ALL {
            let expected = matches!(role, UserRole::Gso | UserRole::GsoStaff);
            assert_eq!(role_allows(role, NavTarget::PlaceOrder), expected, "{role:?}");
        }
    }

    #[test]
    fn filtered_menu_preserves_declaration_order() {
        let admin: Vec<&str> = entries_for_role(UserRole::Admin)
            .iter()
            .map(|entry| entry.title)
            .collect();
        assert_eq!(
            admin,
            [
                "Dashboard",
                "User Management",
                "Fuel Settings",
                "Truck Records",
                "Orders",
                "Inventory"
            ]
        );
    }
}
