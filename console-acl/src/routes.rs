//! Route-permission table
//!
//! Static association from console route pattern to the single permission
//! required to open it. Lookup is exact-match on the pattern; a route absent
//! from the table requires no permission (open by default, a behavior the
//! console's navigation relies on).

use shared::permissions::Permission;
use std::borrow::Cow;

/// Console route patterns and the permission each one requires
///
/// Patterns use `:param` placeholders, the convention of the console's
/// client-side router.
pub const ROUTE_PERMISSIONS: &[(&str, Permission)] = &[
    // Orders
    ("/order/list", Permission::OrdersView),
    ("/order/detail/:id", Permission::OrdersView),
    // Products
    ("/product/list", Permission::ProductsView),
    ("/product/create", Permission::ProductsCreate),
    ("/product/edit/:id", Permission::ProductsUpdate),
    // Console users
    ("/admin/list", Permission::UsersView),
    ("/admin/create", Permission::UsersCreate),
    ("/admin/edit/:id", Permission::UsersUpdate),
    // Roles
    ("/role/list", Permission::RolesView),
    ("/role/create", Permission::RolesCreate),
    ("/role/edit/:id", Permission::RolesUpdate),
    // Branches
    ("/branch/list", Permission::BranchesView),
    ("/branch/create", Permission::BranchesCreate),
    ("/branch/edit/:id", Permission::BranchesUpdate),
    // Suppliers
    ("/supplier/list", Permission::SuppliersView),
    ("/supplier/create", Permission::SuppliersCreate),
    ("/supplier/edit/:id", Permission::SuppliersUpdate),
    // Supplier groups
    ("/supplier-group/list", Permission::SupplierGroupsView),
    ("/supplier-group/create", Permission::SupplierGroupsCreate),
    ("/supplier-group/edit/:id", Permission::SupplierGroupsUpdate),
    // Time slots
    ("/time-slot/list", Permission::TimeSlotsView),
    ("/time-slot/create", Permission::TimeSlotsCreate),
    ("/time-slot/edit/:id", Permission::TimeSlotsUpdate),
    // Pickup locations
    ("/pickup-location/list", Permission::PickupLocationsView),
    ("/pickup-location/create", Permission::PickupLocationsCreate),
    ("/pickup-location/edit/:id", Permission::PickupLocationsUpdate),
    // Reports and settings
    ("/report/sales", Permission::ReportsView),
    ("/settings", Permission::SettingsUpdate),
];

/// The permission required to open a route pattern, if any
///
/// Exact-match only: no wildcard expansion, no precedence between
/// overlapping patterns. `None` means the route is unrestricted.
pub fn required_permission_for(pattern: &str) -> Option<Permission> {
    ROUTE_PERMISSIONS
        .iter()
        .find(|(route, _)| *route == pattern)
        .map(|(_, permission)| *permission)
}

/// Normalize a matcher pattern to the table's `:param` convention
///
/// The HTTP router reports matched paths with `{param}` placeholders; the
/// table keys use the client router's `:param` form.
pub fn canonical_pattern(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains('{') {
        return Cow::Borrowed(pattern);
    }

    let normalized: Vec<Cow<'_, str>> = pattern
        .split('/')
        .map(|segment| {
            match segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
            {
                Some(name) => Cow::Owned(format!(":{}", name)),
                None => Cow::Borrowed(segment),
            }
        })
        .collect();

    Cow::Owned(normalized.join("/"))
}
