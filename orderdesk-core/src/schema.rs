//! Item schema registry.
//!
//! The set of item types is closed: every type is an [`ItemKind`] variant
//! and carries a static, ordered list of [`FieldSpec`]s. Nothing registers
//! types at run time.

use std::fmt;
use std::str::FromStr;

use crate::error::{OrderError, Result};

/// Construction parameters for one field of an item form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldSpec {
    /// Drop-down list of fixed options
    Choice {
        label: &'static str,
        options: &'static [&'static str],
        default: Option<&'static str>,
    },

    /// Integer spinner bounded to `[min, max]`
    Integer {
        label: &'static str,
        min: i64,
        max: i64,
        default: Option<i64>,
    },

    /// Radio-style flag; flags within one form are mutually exclusive
    Flag { label: &'static str, default: bool },
}

impl FieldSpec {
    pub fn label(&self) -> &'static str {
        match self {
            FieldSpec::Choice { label, .. }
            | FieldSpec::Integer { label, .. }
            | FieldSpec::Flag { label, .. } => label,
        }
    }
}

const QUANTITY: FieldSpec = FieldSpec::Integer {
    label: "Quantity",
    min: 1,
    max: 255,
    default: None,
};

const SIDE_OPTIONS: &[&str] = &["right", "left"];

const HEADLIGHT_FIELDS: &[FieldSpec] = &[
    FieldSpec::Choice {
        label: "Type",
        options: SIDE_OPTIONS,
        default: None,
    },
    QUANTITY,
];

const DOOR_FIELDS: &[FieldSpec] = &[
    FieldSpec::Choice {
        label: "Type",
        options: &["front", "back"],
        default: None,
    },
    FieldSpec::Choice {
        label: "Side",
        options: SIDE_OPTIONS,
        default: None,
    },
    QUANTITY,
];

const ENGINE_FIELDS: &[FieldSpec] = &[
    FieldSpec::Flag {
        label: "Gas",
        default: true,
    },
    FieldSpec::Flag {
        label: "Diesel",
        default: false,
    },
    FieldSpec::Choice {
        label: "Capacity",
        options: &["1.4", "1.6", "1.8"],
        default: None,
    },
    FieldSpec::Choice {
        label: "Capacity",
        options: &["1.2", "1.4", "1.6"],
        default: None,
    },
    QUANTITY,
];

/// Registered item types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Headlight,
    Door,
    Engine,
}

impl ItemKind {
    /// All item types, in type-selector order
    pub const ALL: [ItemKind; 3] = [ItemKind::Headlight, ItemKind::Door, ItemKind::Engine];

    /// Name used in the order file
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Headlight => "headlight",
            ItemKind::Door => "door",
            ItemKind::Engine => "engine",
        }
    }

    /// Capitalised name shown in the form header
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::Headlight => "Headlight",
            ItemKind::Door => "Door",
            ItemKind::Engine => "Engine",
        }
    }

    /// Ordered field specifications for this type
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            ItemKind::Headlight => HEADLIGHT_FIELDS,
            ItemKind::Door => DOOR_FIELDS,
            ItemKind::Engine => ENGINE_FIELDS,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| OrderError::unknown_item(s))
    }
}

/// Resolve an item type name to its field specifications
pub fn lookup(name: &str) -> Result<&'static [FieldSpec]> {
    name.parse::<ItemKind>().map(|kind| kind.fields())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_lookup_known_types() {
        assert_eq!(lookup("headlight").unwrap().len(), 2);
        assert_eq!(lookup("door").unwrap().len(), 3);
        assert_eq!(lookup("engine").unwrap().len(), 5);
    }

    #[test]
    fn test_lookup_unknown_type() {
        let err = lookup("wheel").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);

        // Names are matched exactly
        assert!(lookup("Door").is_err());
        assert!(lookup("").is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(kind.as_str().parse::<ItemKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_engine_field_order() {
        let labels: Vec<_> = ItemKind::Engine.fields().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Gas", "Diesel", "Capacity", "Capacity", "Quantity"]);
    }

    #[test]
    fn test_quantity_bounds() {
        for kind in ItemKind::ALL {
            let last = kind.fields().last().unwrap();
            assert!(matches!(
                last,
                FieldSpec::Integer { min: 1, max: 255, .. }
            ));
        }
    }
}
