//! Field widgets: one labelled input holding a value.

use std::fmt;

use crate::error::{OrderError, Result};
use crate::schema::FieldSpec;

/// Key used for every integer field in a collected record
pub const QTY_KEY: &str = "qty";

/// Key contributed by the checked flag of a form
pub const TYPE_KEY: &str = "type";

/// Value held by a field, or read back from an order file
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

/// An instantiated field with its current value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldWidget {
    Choice {
        label: &'static str,
        options: &'static [&'static str],
        selected: usize,
    },
    Integer {
        label: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
    Flag {
        label: &'static str,
        checked: bool,
    },
}

impl FieldWidget {
    /// Instantiate a field from its spec, optionally seeded with a raw value.
    ///
    /// `item` is only used to label errors.
    pub fn build(item: &str, spec: &FieldSpec, raw: Option<&FieldValue>) -> Result<Self> {
        let widget = match *spec {
            FieldSpec::Choice {
                label,
                options,
                default,
            } => {
                let wanted = match raw {
                    Some(value) => Some(value.to_string()),
                    None => default.map(str::to_string),
                };
                // Unmatched values fall back to the first option
                let selected = wanted
                    .and_then(|w| options.iter().position(|opt| *opt == w))
                    .unwrap_or(0);
                FieldWidget::Choice {
                    label,
                    options,
                    selected,
                }
            }

            FieldSpec::Integer {
                label,
                min,
                max,
                default,
            } => {
                let value = match raw {
                    None => default.unwrap_or(min),
                    Some(FieldValue::Integer(n)) => *n,
                    Some(FieldValue::Text(s)) => s.trim().parse::<i64>().map_err(|_| {
                        OrderError::invalid_default(item, label, format!("'{}' is not an integer", s))
                    })?,
                    Some(FieldValue::Flag(b)) => {
                        return Err(OrderError::invalid_default(
                            item,
                            label,
                            format!("boolean '{}' is not an integer", b),
                        ))
                    }
                };
                FieldWidget::Integer {
                    label,
                    min,
                    max,
                    value: value.clamp(min, max),
                }
            }

            FieldSpec::Flag { label, default } => {
                let checked = match raw {
                    None => default,
                    Some(FieldValue::Flag(b)) => *b,
                    Some(other) => other.to_string().to_lowercase() == label.to_lowercase(),
                };
                FieldWidget::Flag { label, checked }
            }
        };

        Ok(widget)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldWidget::Choice { label, .. }
            | FieldWidget::Integer { label, .. }
            | FieldWidget::Flag { label, .. } => label,
        }
    }

    /// Current value of the control
    pub fn current(&self) -> FieldValue {
        match self {
            FieldWidget::Choice {
                options, selected, ..
            } => FieldValue::Text(options[*selected].to_string()),
            FieldWidget::Integer { value, .. } => FieldValue::Integer(*value),
            FieldWidget::Flag { checked, .. } => FieldValue::Flag(*checked),
        }
    }

    /// Key/value this field contributes to a collected record.
    ///
    /// Unchecked flags contribute nothing.
    pub fn record_entry(&self) -> Option<(String, FieldValue)> {
        match self {
            FieldWidget::Choice { label, .. } => Some((label.to_lowercase(), self.current())),
            FieldWidget::Integer { value, .. } => {
                Some((QTY_KEY.to_string(), FieldValue::Integer(*value)))
            }
            FieldWidget::Flag { label, checked } => checked
                .then(|| (TYPE_KEY.to_string(), FieldValue::Text(label.to_lowercase()))),
        }
    }

    /// Step the value by `delta`.
    ///
    /// Choices wrap around, integers clamp to their bounds. Flags are left
    /// alone: their exclusivity is owned by the form.
    pub fn cycle(&mut self, delta: i64) {
        match self {
            FieldWidget::Choice {
                options, selected, ..
            } => {
                let len = options.len() as i64;
                *selected = (*selected as i64 + delta).rem_euclid(len) as usize;
            }
            FieldWidget::Integer {
                min, max, value, ..
            } => {
                *value = value.saturating_add(delta).clamp(*min, *max);
            }
            FieldWidget::Flag { .. } => {}
        }
    }

    /// Set a flag's checked state; no-op for other controls
    pub fn set_checked(&mut self, on: bool) {
        if let FieldWidget::Flag { checked, .. } = self {
            *checked = on;
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, FieldWidget::Flag { .. })
    }
}
