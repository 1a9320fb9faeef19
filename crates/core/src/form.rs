//! Fixed-schema form state with selective reset.
//!
//! A form is a record whose field set is known at compile time. [`FormState`]
//! keeps the record's initial values next to its current ones so it can reset
//! every field, or every field but a few, without knowing the record's layout.
//!
//! No validation happens here; callers check values when they use them.

use core::fmt;

use thiserror::Error;

/// Errors raised when addressing a form field by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The name does not belong to the form's schema.
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// A record usable as the backing store of a [`FormState`].
pub trait FormSchema: Clone {
    /// Identifies one field of the record.
    type Field: Copy + Eq + fmt::Debug + 'static;

    /// Every field of the record, in display order.
    const FIELDS: &'static [Self::Field];

    /// Wire name of a field (e.g. `postCode`).
    fn field_name(field: Self::Field) -> &'static str;

    /// Current value of a field, `None` when unset.
    fn value(&self, field: Self::Field) -> Option<&str>;

    /// Overwrite a single field.
    fn set_value(&mut self, field: Self::Field, value: Option<String>);

    /// Resolve a field from its wire name.
    #[must_use]
    fn field_by_name(name: &str) -> Option<Self::Field> {
        Self::FIELDS
            .iter()
            .copied()
            .find(|field| Self::field_name(*field) == name)
    }
}

/// Current values of a form plus the defaults it was created with.
#[derive(Debug, Clone)]
pub struct FormState<S: FormSchema> {
    initial: S,
    values: S,
}

impl<S: FormSchema> FormState<S> {
    /// Create a form whose fields start at `initial`.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            values: initial.clone(),
            initial,
        }
    }

    /// The current record.
    #[must_use]
    pub const fn values(&self) -> &S {
        &self.values
    }

    /// Current value of one field.
    #[must_use]
    pub fn value(&self, field: S::Field) -> Option<&str> {
        self.values.value(field)
    }

    /// Overwrite exactly one field, leaving the others untouched.
    pub fn apply(&mut self, field: S::Field, value: Option<String>) {
        self.values.set_value(field, value);
    }

    /// Overwrite a field addressed by its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if the schema has no such field.
    /// The field set never grows.
    pub fn apply_named(&mut self, name: &str, value: Option<String>) -> Result<(), FormError> {
        let field = S::field_by_name(name).ok_or_else(|| FormError::UnknownField(name.to_owned()))?;
        self.apply(field, value);
        Ok(())
    }

    /// Restore every field to its initial value, except `exceptions`.
    ///
    /// Fields listed in `exceptions` keep their current value. An empty slice
    /// resets the whole form.
    pub fn reset_all(&mut self, exceptions: &[S::Field]) {
        let mut next = self.initial.clone();
        for &field in exceptions {
            next.set_value(field, self.values.value(field).map(str::to_owned));
        }
        self.values = next;
    }
}

impl<S: FormSchema + Default> Default for FormState<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Fields of the address book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    PostCode,
    HouseNumber,
    FirstName,
    LastName,
    SelectedAddress,
}

/// The address book form: lookup inputs, person inputs and the selection.
///
/// Text fields read as `""` when unset; `selected_address` stays `None`
/// until a candidate is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressForm {
    pub post_code: String,
    pub house_number: String,
    pub first_name: String,
    pub last_name: String,
    pub selected_address: Option<String>,
}

impl FormSchema for AddressForm {
    type Field = AddressField;

    const FIELDS: &'static [AddressField] = &[
        AddressField::PostCode,
        AddressField::HouseNumber,
        AddressField::FirstName,
        AddressField::LastName,
        AddressField::SelectedAddress,
    ];

    fn field_name(field: AddressField) -> &'static str {
        match field {
            AddressField::PostCode => "postCode",
            AddressField::HouseNumber => "houseNumber",
            AddressField::FirstName => "firstName",
            AddressField::LastName => "lastName",
            AddressField::SelectedAddress => "selectedAddress",
        }
    }

    fn value(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::PostCode => Some(&self.post_code),
            AddressField::HouseNumber => Some(&self.house_number),
            AddressField::FirstName => Some(&self.first_name),
            AddressField::LastName => Some(&self.last_name),
            AddressField::SelectedAddress => self.selected_address.as_deref(),
        }
    }

    fn set_value(&mut self, field: AddressField, value: Option<String>) {
        match field {
            AddressField::PostCode => self.post_code = value.unwrap_or_default(),
            AddressField::HouseNumber => self.house_number = value.unwrap_or_default(),
            AddressField::FirstName => self.first_name = value.unwrap_or_default(),
            AddressField::LastName => self.last_name = value.unwrap_or_default(),
            AddressField::SelectedAddress => self.selected_address = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState<AddressForm> {
        let mut form = FormState::<AddressForm>::default();
        form.apply(AddressField::PostCode, Some("1234".into()));
        form.apply(AddressField::HouseNumber, Some("5".into()));
        form.apply(AddressField::FirstName, Some("Ada".into()));
        form.apply(AddressField::LastName, Some("Lovelace".into()));
        form.apply(AddressField::SelectedAddress, Some("5".into()));
        form
    }

    #[test]
    fn test_apply_touches_one_field() {
        let mut form = FormState::<AddressForm>::default();
        form.apply(AddressField::FirstName, Some("Ada".into()));
        assert_eq!(
            form.values(),
            &AddressForm {
                first_name: "Ada".into(),
                ..AddressForm::default()
            }
        );
    }

    #[test]
    fn test_reset_all_restores_constructor_defaults() {
        let initial = AddressForm {
            post_code: "9999".into(),
            ..AddressForm::default()
        };
        let mut form = FormState::new(initial.clone());
        form.apply(AddressField::PostCode, Some("1234".into()));
        form.apply(AddressField::PostCode, Some("4321".into()));
        form.apply(AddressField::SelectedAddress, Some("5".into()));

        form.reset_all(&[]);
        assert_eq!(form.values(), &initial);
    }

    #[test]
    fn test_reset_all_preserves_exceptions() {
        let mut form = filled();
        form.apply(AddressField::PostCode, Some("5678".into()));

        form.reset_all(&[AddressField::PostCode]);
        assert_eq!(
            form.values(),
            &AddressForm {
                post_code: "5678".into(),
                ..AddressForm::default()
            }
        );
    }

    #[test]
    fn test_reset_all_with_several_exceptions() {
        let mut form = filled();
        form.reset_all(&[AddressField::PostCode, AddressField::HouseNumber]);
        assert_eq!(form.value(AddressField::PostCode), Some("1234"));
        assert_eq!(form.value(AddressField::HouseNumber), Some("5"));
        assert_eq!(form.value(AddressField::FirstName), Some(""));
        assert_eq!(form.value(AddressField::SelectedAddress), None);
    }

    #[test]
    fn test_apply_named() {
        let mut form = FormState::<AddressForm>::default();
        assert!(form.apply_named("lastName", Some("Byron".into())).is_ok());
        assert_eq!(form.values().last_name, "Byron");

        assert_eq!(
            form.apply_named("middleName", Some("x".into())),
            Err(FormError::UnknownField("middleName".into()))
        );
    }

    #[test]
    fn test_unset_text_field_reads_empty() {
        let mut form = filled();
        form.apply(AddressField::FirstName, None);
        assert_eq!(form.value(AddressField::FirstName), Some(""));
    }

    #[test]
    fn test_field_names_resolve_back() {
        for &field in AddressForm::FIELDS {
            assert_eq!(
                AddressForm::field_by_name(AddressForm::field_name(field)),
                Some(field)
            );
        }
    }
}
