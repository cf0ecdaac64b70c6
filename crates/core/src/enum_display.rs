//! Enum display names with optional per-member overrides.
//!
//! Enums are declared through [`display_enum!`](crate::display_enum), which
//! records every member's identifier, discriminant and optional display
//! override in a `const` table. Resolution never inspects the type at
//! runtime; it only reads that table.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Member table
// ---------------------------------------------------------------------------

/// One row of an enum's display table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember {
    /// The member identifier as written in the source.
    pub name: &'static str,
    /// The member discriminant.
    pub value: i64,
    /// Display string used instead of `name`, if any.
    pub display: Option<&'static str>,
}

/// An enumeration whose members carry a display table.
///
/// Implemented by [`display_enum!`](crate::display_enum); implementing it by
/// hand is possible but the table must list every member exactly once.
pub trait DisplayEnum: Copy + 'static {
    /// Every member in declaration order.
    const MEMBERS: &'static [EnumMember];

    /// The member's discriminant.
    fn to_raw(self) -> i64;
}

/// Symbolic name for a raw value: the member identifier, or the decimal
/// rendering when no member has that discriminant (combined flags, casts).
fn symbolic_name(members: &[EnumMember], raw: i64) -> String {
    members
        .iter()
        .find(|m| m.value == raw)
        .map(|m| m.name.to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn resolve(members: &[EnumMember], raw: i64) -> String {
    let symbolic = symbolic_name(members, raw);
    match members.iter().find(|m| m.name == symbolic) {
        Some(EnumMember {
            display: Some(display),
            ..
        }) => (*display).to_string(),
        _ => symbolic,
    }
}

/// Resolve the display string for an enum value.
///
/// Returns the member's override when one is declared, otherwise the member
/// identifier.
pub fn display_name<T: DisplayEnum>(value: T) -> String {
    resolve(T::MEMBERS, value.to_raw())
}

/// Resolve the display string for a raw discriminant of `T`.
///
/// Values that match no member render as their decimal representation.
pub fn display_name_raw<T: DisplayEnum>(raw: i64) -> String {
    resolve(T::MEMBERS, raw)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

struct CatalogEntry {
    raw_of: fn(&dyn Any) -> Option<i64>,
    names: HashMap<i64, &'static str>,
    overrides: HashMap<&'static str, &'static str>,
}

fn raw_of<T: DisplayEnum>(value: &dyn Any) -> Option<i64> {
    value.downcast_ref::<T>().map(|v| v.to_raw())
}

/// Lookup tables for a set of display enums, keyed by type.
///
/// Used where the value's type is only known at runtime. Build it once
/// (typically in a `LazyLock`) and share it; it is read-only afterwards.
#[derive(Default)]
pub struct EnumCatalog {
    entries: HashMap<TypeId, CatalogEntry>,
}

impl EnumCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `T`'s member table. Registering the same type twice is a no-op.
    pub fn register<T: DisplayEnum>(mut self) -> Self {
        self.entries.entry(TypeId::of::<T>()).or_insert_with(|| {
            let names = T::MEMBERS.iter().map(|m| (m.value, m.name)).collect();
            let overrides = T::MEMBERS
                .iter()
                .filter_map(|m| m.display.map(|d| (m.name, d)))
                .collect();
            CatalogEntry {
                raw_of: raw_of::<T>,
                names,
                overrides,
            }
        });
        self
    }

    /// Whether `T` has been registered.
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Resolve the display string for `value`.
    ///
    /// Fails with [`CoreError::InvalidArgument`] when the value's type is not
    /// a registered enum.
    pub fn display_name<T: Any>(&self, value: &T) -> Result<String, CoreError> {
        let not_enum = || {
            CoreError::InvalidArgument(format!(
                "{} must be enum type",
                std::any::type_name::<T>()
            ))
        };

        let entry = self.entries.get(&TypeId::of::<T>()).ok_or_else(not_enum)?;
        let raw = (entry.raw_of)(value).ok_or_else(not_enum)?;

        let symbolic = entry
            .names
            .get(&raw)
            .map(|name| name.to_string())
            .unwrap_or_else(|| raw.to_string());

        Ok(entry
            .overrides
            .get(symbolic.as_str())
            .map(|display| display.to_string())
            .unwrap_or(symbolic))
    }
}

// ---------------------------------------------------------------------------
// Declaration macro
// ---------------------------------------------------------------------------

/// Declare a fieldless enum together with its display table.
///
/// Each member takes an explicit discriminant and an optional `=> "text"`
/// display override. The generated type implements [`DisplayEnum`] and
/// `Display` (through [`display_name`]), so it must derive `Clone` and `Copy`.
///
/// ```
/// use extkit_core::{display_enum, display_name};
///
/// display_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum PaymentStatus {
///         Pending = 0,
///         Paid = 1 => "Payment Received",
///     }
/// }
///
/// assert_eq!(display_name(PaymentStatus::Pending), "Pending");
/// assert_eq!(display_name(PaymentStatus::Paid), "Payment Received");
/// assert_eq!(PaymentStatus::Paid.to_string(), "Payment Received");
/// ```
#[macro_export]
macro_rules! display_enum {
    (@display) => { ::core::option::Option::None };
    (@display $text:literal) => { ::core::option::Option::Some($text) };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident = $value:expr $( => $display:literal )? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $variant = $value ),+
        }

        impl $crate::enum_display::DisplayEnum for $name {
            const MEMBERS: &'static [$crate::enum_display::EnumMember] = &[
                $(
                    $crate::enum_display::EnumMember {
                        name: stringify!($variant),
                        value: $name::$variant as i64,
                        display: $crate::display_enum!(@display $( $display )?),
                    }
                ),+
            ];

            fn to_raw(self) -> i64 {
                self as i64
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::enum_display::display_name(*self))
            }
        }
    };
}
