//! Permission catalog
//!
//! Closed enumeration of every permission the console knows about. The wire
//! form is `"<resource>.<action>"` (e.g. `"orders.view"`); identifiers that
//! are not in the catalog fail to parse instead of silently failing every
//! membership test downstream.
//!
//! ## Catalog layout
//! - Entity screens (orders, products, users, roles, branches, suppliers,
//!   supplier groups, time slots, pickup locations) carry
//!   `view` / `create` / `update` / `delete`
//! - `reports` carries `view` only
//! - `settings` carries `update` only

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single permission identifier
///
/// Serializes as its wire token (`"orders.view"`), mirroring how the rest of
/// the console exchanges permission lists with the session backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Permission {
    // === Orders ===
    OrdersView,
    OrdersCreate,
    OrdersUpdate,
    OrdersDelete,

    // === Products ===
    ProductsView,
    ProductsCreate,
    ProductsUpdate,
    ProductsDelete,

    // === Users (console employees/admins) ===
    UsersView,
    UsersCreate,
    UsersUpdate,
    UsersDelete,

    // === Roles ===
    RolesView,
    RolesCreate,
    RolesUpdate,
    RolesDelete,

    // === Branches ===
    BranchesView,
    BranchesCreate,
    BranchesUpdate,
    BranchesDelete,

    // === Suppliers ===
    SuppliersView,
    SuppliersCreate,
    SuppliersUpdate,
    SuppliersDelete,

    // === Supplier groups ===
    SupplierGroupsView,
    SupplierGroupsCreate,
    SupplierGroupsUpdate,
    SupplierGroupsDelete,

    // === Time slots ===
    TimeSlotsView,
    TimeSlotsCreate,
    TimeSlotsUpdate,
    TimeSlotsDelete,

    // === Pickup locations ===
    PickupLocationsView,
    PickupLocationsCreate,
    PickupLocationsUpdate,
    PickupLocationsDelete,

    // === Reports ===
    ReportsView,

    // === Settings ===
    SettingsUpdate,
}

impl Permission {
    /// Every identifier in the catalog, in declaration order
    pub const ALL: &'static [Permission] = &[
        Permission::OrdersView,
        Permission::OrdersCreate,
        Permission::OrdersUpdate,
        Permission::OrdersDelete,
        Permission::ProductsView,
        Permission::ProductsCreate,
        Permission::ProductsUpdate,
        Permission::ProductsDelete,
        Permission::UsersView,
        Permission::UsersCreate,
        Permission::UsersUpdate,
        Permission::UsersDelete,
        Permission::RolesView,
        Permission::RolesCreate,
        Permission::RolesUpdate,
        Permission::RolesDelete,
        Permission::BranchesView,
        Permission::BranchesCreate,
        Permission::BranchesUpdate,
        Permission::BranchesDelete,
        Permission::SuppliersView,
        Permission::SuppliersCreate,
        Permission::SuppliersUpdate,
        Permission::SuppliersDelete,
        Permission::SupplierGroupsView,
        Permission::SupplierGroupsCreate,
        Permission::SupplierGroupsUpdate,
        Permission::SupplierGroupsDelete,
        Permission::TimeSlotsView,
        Permission::TimeSlotsCreate,
        Permission::TimeSlotsUpdate,
        Permission::TimeSlotsDelete,
        Permission::PickupLocationsView,
        Permission::PickupLocationsCreate,
        Permission::PickupLocationsUpdate,
        Permission::PickupLocationsDelete,
        Permission::ReportsView,
        Permission::SettingsUpdate,
    ];

    /// The wire token for this permission
    pub const fn as_str(&self) -> &'static str {
        match self {
            Permission::OrdersView => "orders.view",
            Permission::OrdersCreate => "orders.create",
            Permission::OrdersUpdate => "orders.update",
            Permission::OrdersDelete => "orders.delete",
            Permission::ProductsView => "products.view",
            Permission::ProductsCreate => "products.create",
            Permission::ProductsUpdate => "products.update",
            Permission::ProductsDelete => "products.delete",
            Permission::UsersView => "users.view",
            Permission::UsersCreate => "users.create",
            Permission::UsersUpdate => "users.update",
            Permission::UsersDelete => "users.delete",
            Permission::RolesView => "roles.view",
            Permission::RolesCreate => "roles.create",
            Permission::RolesUpdate => "roles.update",
            Permission::RolesDelete => "roles.delete",
            Permission::BranchesView => "branches.view",
            Permission::BranchesCreate => "branches.create",
            Permission::BranchesUpdate => "branches.update",
            Permission::BranchesDelete => "branches.delete",
            Permission::SuppliersView => "suppliers.view",
            Permission::SuppliersCreate => "suppliers.create",
            Permission::SuppliersUpdate => "suppliers.update",
            Permission::SuppliersDelete => "suppliers.delete",
            Permission::SupplierGroupsView => "supplier_groups.view",
            Permission::SupplierGroupsCreate => "supplier_groups.create",
            Permission::SupplierGroupsUpdate => "supplier_groups.update",
            Permission::SupplierGroupsDelete => "supplier_groups.delete",
            Permission::TimeSlotsView => "time_slots.view",
            Permission::TimeSlotsCreate => "time_slots.create",
            Permission::TimeSlotsUpdate => "time_slots.update",
            Permission::TimeSlotsDelete => "time_slots.delete",
            Permission::PickupLocationsView => "pickup_locations.view",
            Permission::PickupLocationsCreate => "pickup_locations.create",
            Permission::PickupLocationsUpdate => "pickup_locations.update",
            Permission::PickupLocationsDelete => "pickup_locations.delete",
            Permission::ReportsView => "reports.view",
            Permission::SettingsUpdate => "settings.update",
        }
    }

    /// The resource half of the token (`"orders.view"` -> `"orders"`)
    pub fn resource(&self) -> &'static str {
        self.group().name()
    }

    /// The action half of the token (`"orders.view"` -> `"view"`)
    pub fn action(&self) -> &'static str {
        match self.as_str().split_once('.') {
            Some((_, action)) => action,
            None => "",
        }
    }

    /// The domain group this permission belongs to
    pub const fn group(&self) -> PermissionGroup {
        match self {
            Permission::OrdersView
            | Permission::OrdersCreate
            | Permission::OrdersUpdate
            | Permission::OrdersDelete => PermissionGroup::Orders,
            Permission::ProductsView
            | Permission::ProductsCreate
            | Permission::ProductsUpdate
            | Permission::ProductsDelete => PermissionGroup::Products,
            Permission::UsersView
            | Permission::UsersCreate
            | Permission::UsersUpdate
            | Permission::UsersDelete => PermissionGroup::Users,
            Permission::RolesView
            | Permission::RolesCreate
            | Permission::RolesUpdate
            | Permission::RolesDelete => PermissionGroup::Roles,
            Permission::BranchesView
            | Permission::BranchesCreate
            | Permission::BranchesUpdate
            | Permission::BranchesDelete => PermissionGroup::Branches,
            Permission::SuppliersView
            | Permission::SuppliersCreate
            | Permission::SuppliersUpdate
            | Permission::SuppliersDelete => PermissionGroup::Suppliers,
            Permission::SupplierGroupsView
            | Permission::SupplierGroupsCreate
            | Permission::SupplierGroupsUpdate
            | Permission::SupplierGroupsDelete => PermissionGroup::SupplierGroups,
            Permission::TimeSlotsView
            | Permission::TimeSlotsCreate
            | Permission::TimeSlotsUpdate
            | Permission::TimeSlotsDelete => PermissionGroup::TimeSlots,
            Permission::PickupLocationsView
            | Permission::PickupLocationsCreate
            | Permission::PickupLocationsUpdate
            | Permission::PickupLocationsDelete => PermissionGroup::PickupLocations,
            Permission::ReportsView => PermissionGroup::Reports,
            Permission::SettingsUpdate => PermissionGroup::Settings,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a token that is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPermission(pub String);

impl fmt::Display for UnknownPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown permission: {}", self.0)
    }
}

impl std::error::Error for UnknownPermission {}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.as_str().to_string()
    }
}

impl TryFrom<String> for Permission {
    type Error = UnknownPermission;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Permission domain groups, for permission-picker screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionGroup {
    Orders,
    Products,
    Users,
    Roles,
    Branches,
    Suppliers,
    SupplierGroups,
    TimeSlots,
    PickupLocations,
    Reports,
    Settings,
}

impl PermissionGroup {
    /// Every group, in catalog order
    pub const ALL: &'static [PermissionGroup] = &[
        PermissionGroup::Orders,
        PermissionGroup::Products,
        PermissionGroup::Users,
        PermissionGroup::Roles,
        PermissionGroup::Branches,
        PermissionGroup::Suppliers,
        PermissionGroup::SupplierGroups,
        PermissionGroup::TimeSlots,
        PermissionGroup::PickupLocations,
        PermissionGroup::Reports,
        PermissionGroup::Settings,
    ];

    /// The resource name shared by this group's tokens
    pub const fn name(&self) -> &'static str {
        match self {
            PermissionGroup::Orders => "orders",
            PermissionGroup::Products => "products",
            PermissionGroup::Users => "users",
            PermissionGroup::Roles => "roles",
            PermissionGroup::Branches => "branches",
            PermissionGroup::Suppliers => "suppliers",
            PermissionGroup::SupplierGroups => "supplier_groups",
            PermissionGroup::TimeSlots => "time_slots",
            PermissionGroup::PickupLocations => "pickup_locations",
            PermissionGroup::Reports => "reports",
            PermissionGroup::Settings => "settings",
        }
    }

    /// The catalog entries belonging to this group
    pub fn members(&self) -> impl Iterator<Item = Permission> + '_ {
        Permission::ALL
            .iter()
            .copied()
            .filter(move |p| p.group() == *self)
    }
}

/// Manager role default grants: everything operational, no user/role/settings
/// administration
pub const DEFAULT_MANAGER_PERMISSIONS: &[Permission] = &[
    Permission::OrdersView,
    Permission::OrdersCreate,
    Permission::OrdersUpdate,
    Permission::OrdersDelete,
    Permission::ProductsView,
    Permission::ProductsCreate,
    Permission::ProductsUpdate,
    Permission::ProductsDelete,
    Permission::BranchesView,
    Permission::SuppliersView,
    Permission::SuppliersCreate,
    Permission::SuppliersUpdate,
    Permission::SupplierGroupsView,
    Permission::SupplierGroupsCreate,
    Permission::SupplierGroupsUpdate,
    Permission::TimeSlotsView,
    Permission::TimeSlotsCreate,
    Permission::TimeSlotsUpdate,
    Permission::TimeSlotsDelete,
    Permission::PickupLocationsView,
    Permission::PickupLocationsCreate,
    Permission::PickupLocationsUpdate,
    Permission::ReportsView,
];

/// Clerk role default grants: read-only screens
pub const DEFAULT_CLERK_PERMISSIONS: &[Permission] = &[
    Permission::OrdersView,
    Permission::ProductsView,
    Permission::BranchesView,
    Permission::SuppliersView,
    Permission::SupplierGroupsView,
    Permission::TimeSlotsView,
    Permission::PickupLocationsView,
];

/// Get the default grants for a role name
///
/// `admin` receives the full catalog. An unknown role name receives nothing.
pub fn default_permissions(role_name: &str) -> Vec<Permission> {
    match role_name {
        "admin" => Permission::ALL.to_vec(),
        "manager" => DEFAULT_MANAGER_PERMISSIONS.to_vec(),
        "clerk" => DEFAULT_CLERK_PERMISSIONS.to_vec(),
        _ => vec![],
    }
}
