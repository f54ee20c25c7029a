//! Item forms and the records collected from them.

use tracing::debug;

use crate::error::{OrderError, Result};
use crate::field::{FieldValue, FieldWidget};
use crate::schema::ItemKind;

/// Values collected from one form, keyed the way the order file stores them
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRecord {
    pub kind: ItemKind,

    /// Keys in first-insertion order
    pub fields: Vec<(String, FieldValue)>,
}

impl ItemRecord {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    /// Insert or overwrite a key. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Values in key order, without keys
    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, v)| v)
    }
}

/// Ordered list of records, as displayed and as persisted
pub type Order = Vec<ItemRecord>;

/// Lifecycle of a form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    /// Built but not yet shown in a panel
    Constructed,
    /// Owned by a panel
    Displayed,
    /// Detached from its panel; terminal
    Removed,
}

/// One instantiated group of fields for an item type
#[derive(Clone, Debug)]
pub struct ItemForm {
    kind: ItemKind,
    fields: Vec<FieldWidget>,
    state: FormState,
}

impl ItemForm {
    /// Build one widget per field spec, in schema order.
    ///
    /// `defaults`, when given, must line up 1:1 with the schema.
    pub fn create(kind: ItemKind, defaults: Option<&[FieldValue]>) -> Result<Self> {
        let specs = kind.fields();

        if let Some(defaults) = defaults {
            if defaults.len() != specs.len() {
                return Err(OrderError::defaults_mismatch(
                    kind.as_str(),
                    specs.len(),
                    defaults.len(),
                ));
            }
        }

        let fields = specs
            .iter()
            .enumerate()
            .map(|(idx, spec)| {
                let raw = defaults.map(|d| &d[idx]);
                FieldWidget::build(kind.as_str(), spec, raw)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(item = %kind, seeded = defaults.is_some(), "created item form");

        Ok(Self {
            kind,
            fields,
            state: FormState::Constructed,
        })
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: FormState) {
        self.state = state;
    }

    pub fn fields(&self) -> &[FieldWidget] {
        &self.fields
    }

    /// Read every field into a record.
    ///
    /// Choices are keyed by lowercased label, integers by `qty`, and the
    /// checked flag contributes `type` with its lowercased label. A repeated
    /// key keeps its first position and takes the later value.
    pub fn collect(&self) -> ItemRecord {
        let mut record = ItemRecord::new(self.kind);
        for (key, value) in self.fields.iter().filter_map(FieldWidget::record_entry) {
            record.insert(key, value);
        }
        record
    }

    /// Check the flag at `index` and clear every other flag in the form
    pub fn select_flag(&mut self, index: usize) {
        if !self.fields.get(index).is_some_and(FieldWidget::is_flag) {
            return;
        }
        for (idx, field) in self.fields.iter_mut().enumerate() {
            field.set_checked(idx == index);
        }
    }

    /// Step the field at `index`. A positive step on a flag selects it.
    pub fn adjust(&mut self, index: usize, delta: i64) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        if field.is_flag() {
            if delta > 0 {
                self.select_flag(index);
            }
        } else {
            field.cycle(delta);
        }
    }
}
