//! Order panel: the ordered collection of displayed item forms.

use std::fmt;

use tracing::info;

use crate::error::Result;
use crate::form::{FormState, ItemForm, Order};
use crate::persist::expand_defaults;
use crate::schema::ItemKind;

/// Identity of a form inside its panel. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormId(u64);

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Exclusive owner of the forms it displays
#[derive(Debug, Default)]
pub struct OrderPanel {
    forms: Vec<(FormId, ItemForm)>,
    next_id: u64,
}

impl OrderPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a form at the end of the panel and return its identity
    pub fn append(&mut self, mut form: ItemForm) -> FormId {
        let id = FormId(self.next_id);
        self.next_id += 1;
        form.set_state(FormState::Displayed);
        info!(id = %id, item = %form.kind(), "appended item form");
        self.forms.push((id, form));
        id
    }

    /// Build a default form for `kind` and append it
    pub fn add(&mut self, kind: ItemKind) -> Result<FormId> {
        let form = ItemForm::create(kind, None)?;
        Ok(self.append(form))
    }

    /// Detach the form with `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: FormId) -> Option<ItemForm> {
        let index = self.position(id)?;
        let (_, mut form) = self.forms.remove(index);
        form.set_state(FormState::Removed);
        info!(id = %id, item = %form.kind(), "removed item form");
        Some(form)
    }

    /// Collect every form, in display order
    pub fn snapshot(&self) -> Order {
        self.forms.iter().map(|(_, form)| form.collect()).collect()
    }

    /// Detach and discard all forms
    pub fn clear(&mut self) {
        for (_, form) in self.forms.iter_mut() {
            form.set_state(FormState::Removed);
        }
        self.forms.clear();
    }

    /// Replace the panel contents with one form per record.
    ///
    /// All forms are built before anything is replaced, so a failing record
    /// leaves the panel as it was.
    pub fn repopulate(&mut self, order: &Order) -> Result<()> {
        let forms = order
            .iter()
            .map(|record| ItemForm::create(record.kind, Some(&expand_defaults(record))))
            .collect::<Result<Vec<_>>>()?;

        self.clear();
        for form in forms {
            self.append(form);
        }
        info!(count = self.forms.len(), "repopulated order panel");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn position(&self, id: FormId) -> Option<usize> {
        self.forms.iter().position(|(form_id, _)| *form_id == id)
    }

    /// Forms with their identities, in display order
    pub fn forms(&self) -> impl Iterator<Item = (FormId, &ItemForm)> {
        self.forms.iter().map(|(id, form)| (*id, form))
    }

    pub fn get(&self, index: usize) -> Option<(FormId, &ItemForm)> {
        self.forms.get(index).map(|(id, form)| (*id, form))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ItemForm> {
        self.forms.get_mut(index).map(|(_, form)| form)
    }
}
