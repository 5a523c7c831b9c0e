//! Collection filters: project a dataset down to what a context may see.
//!
//! Filters keep input order and hand back references to the input elements.
//! Unlimited access still yields a fresh `Vec`, so callers never share a
//! buffer with the filter's input.

use crate::TenantContext;

use pms_core::{Booking, Property, PropertyId};

/// An entity that belongs to a property (bookings, invoices, rooms).
pub trait PropertyScoped {
    fn property_id(&self) -> PropertyId;
}

/// The property entity itself, keyed by its own id.
pub trait PropertyKeyed {
    fn id(&self) -> PropertyId;
}

impl<T: PropertyScoped + ?Sized> PropertyScoped for &T {
    fn property_id(&self) -> PropertyId {
        (**self).property_id()
    }
}

impl<T: PropertyKeyed + ?Sized> PropertyKeyed for &T {
    fn id(&self) -> PropertyId {
        (**self).id()
    }
}

impl PropertyScoped for Booking {
    fn property_id(&self) -> PropertyId {
        self.property_id
    }
}

impl PropertyKeyed for Property {
    fn id(&self) -> PropertyId {
        self.id
    }
}

/// Keep the items whose `property_id` the context can access.
pub fn filter_by_property_access<'a, T: PropertyScoped>(
    ctx: &TenantContext,
    items: &'a [T],
) -> Vec<&'a T> {
    filter_with(ctx, items, |item| item.property_id())
}

/// Keep the properties the context can access.
pub fn filter_properties_by_access<'a, P: PropertyKeyed>(
    ctx: &TenantContext,
    properties: &'a [P],
) -> Vec<&'a P> {
    filter_with(ctx, properties, |property| property.id())
}

/// Owned variant of [`filter_by_property_access`].
pub fn retain_by_property_access<T: PropertyScoped>(
    ctx: &TenantContext,
    mut items: Vec<T>,
) -> Vec<T> {
    if !ctx.has_unlimited_access() {
        items.retain(|item| ctx.can_access_property(item.property_id()));
    }
    items
}

/// Owned variant of [`filter_properties_by_access`].
pub fn retain_properties_by_access<P: PropertyKeyed>(
    ctx: &TenantContext,
    mut properties: Vec<P>,
) -> Vec<P> {
    if !ctx.has_unlimited_access() {
        properties.retain(|property| ctx.can_access_property(property.id()));
    }
    properties
}

fn filter_with<'a, T, F>(ctx: &TenantContext, items: &'a [T], key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> PropertyId,
{
    if ctx.has_unlimited_access() {
        return items.iter().collect();
    }
    if ctx.assigned_property_ids().is_empty() {
        return Vec::new();
    }

    items
        .iter()
        .filter(|item| ctx.can_access_property(key(*item)))
        .collect()
}
