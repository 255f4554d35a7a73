use crate::error::UiError;
use crate::font::Font;
use crate::text::TextField;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u32);

impl FieldId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Owns the text fields of a form and the order focus moves through them
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<TextField>,
    next_id: u32,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&mut self, font: Font) -> Result<FieldId, UiError> {
        let id = FieldId::new(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or(UiError::FormFull)?;
        self.fields.push(TextField::new(id, font));
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &TextField> {
        self.fields.iter()
    }

    pub fn field(&self, id: FieldId) -> Result<&TextField, UiError> {
        self.fields
            .iter()
            .find(|field| field.id() == id)
            .ok_or(UiError::UnknownField(id))
    }

    pub fn field_mut(&mut self, id: FieldId) -> Result<&mut TextField, UiError> {
        self.fields
            .iter_mut()
            .find(|field| field.id() == id)
            .ok_or(UiError::UnknownField(id))
    }

    /// Makes `next` the field focused after `from` returns, [`None`] ends the chain at `from`
    pub fn chain(&mut self, from: FieldId, next: Option<FieldId>) -> Result<(), UiError> {
        if let Some(next) = next {
            if next == from {
                return Err(UiError::SelfChained(from));
            }
            self.field(next)?;
        }
        self.field_mut(from)?.set_next_text_field(next);
        Ok(())
    }

    /// Chains every field to the one added after it, the last one ending the chain
    pub fn chain_in_order(&mut self) {
        let ids: Vec<FieldId> = self.fields.iter().map(TextField::id).collect();
        for (field, next) in self.fields.iter_mut().zip(
            ids.iter()
                .skip(1)
                .map(|id| Some(*id))
                .chain(std::iter::once(None)),
        ) {
            field.set_next_text_field(next);
        }
        tracing::trace!("Chained {} fields", ids.len());
    }

    /// The field focus moves to once `id` returns
    pub fn next_after(&self, id: FieldId) -> Result<Option<&TextField>, UiError> {
        match self.field(id)?.next_text_field() {
            None => Ok(None),
            Some(next) => self.field(next).map(Some),
        }
    }
}
