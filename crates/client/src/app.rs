//! Application flow.
//!
//! [`AddressBookApp`] owns the form, the search state machine and the address
//! book, and implements the two submit actions that move data between them:
//!
//! 1. Address submit: look up the form's postcode and house number, then reset
//!    every other form field.
//! 2. Person submit: attach the form's names to the selected candidate and add
//!    the result to the address book.

use address_book_core::{
    AddressBook, AddressBookEntry, AddressField, AddressForm, EntryId, FormError, FormState,
};
use thiserror::Error;
use tracing::instrument;

use crate::lookup::LookupClient;
use crate::search::{AddressSearch, SearchState};

/// Reasons a person submit is refused. `Display` is the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PersonError {
    #[error("First name and last name fields mandatory!")]
    MissingNames,
    #[error("No address selected, try to select an address or find one if you haven't")]
    NoSelection,
    #[error("Selected address not found")]
    SelectionNotFound,
}

/// Form, search and address book wired together.
#[derive(Debug)]
pub struct AddressBookApp<C> {
    form: FormState<AddressForm>,
    search: AddressSearch<C>,
    book: AddressBook,
    error: String,
}

impl<C: LookupClient> AddressBookApp<C> {
    /// Create the application around an existing address book.
    #[must_use]
    pub fn new(client: C, book: AddressBook) -> Self {
        Self {
            form: FormState::default(),
            search: AddressSearch::new(client),
            book,
            error: String::new(),
        }
    }

    #[must_use]
    pub const fn form(&self) -> &FormState<AddressForm> {
        &self.form
    }

    #[must_use]
    pub const fn search(&self) -> &AddressSearch<C> {
        &self.search
    }

    #[must_use]
    pub const fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Update one form field.
    pub fn set_field(&mut self, field: AddressField, value: impl Into<String>) {
        self.form.apply(field, Some(value.into()));
    }

    /// Update one form field by its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] for names outside the form.
    pub fn set_named_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.form.apply_named(name, Some(value.into()))
    }

    /// Pick a candidate by id.
    pub fn select_address(&mut self, id: impl Into<String>) {
        self.form.apply(AddressField::SelectedAddress, Some(id.into()));
    }

    /// Look up the form's postcode and house number.
    ///
    /// Every form field except those two is reset before the lookup runs.
    #[instrument(skip(self))]
    pub async fn submit_address(&mut self) {
        let AddressForm {
            post_code,
            house_number,
            ..
        } = self.form.values().clone();

        self.form
            .reset_all(&[AddressField::PostCode, AddressField::HouseNumber]);
        self.search.search(&post_code, &house_number).await;
    }

    /// Add the selected candidate, with the form's names, to the address book.
    ///
    /// Returns whether a new entry was inserted; re-adding an existing
    /// (address id, first name, last name) is accepted but changes nothing.
    /// When several candidates share the selected id the first one is used.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`PersonError`]; its text also becomes the
    /// local error.
    #[instrument(skip(self))]
    pub async fn submit_person(&mut self) -> Result<bool, PersonError> {
        let search = self.search.state().await;
        match build_entry(self.form.values(), &search) {
            Ok(entry) => {
                self.error.clear();
                let id = entry.id();
                let inserted = self.book.add(entry);
                tracing::info!(entry_id = %id, inserted, "Person submitted");
                Ok(inserted)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Person submit refused");
                self.error = err.to_string();
                Err(err)
            }
        }
    }

    /// Clear both errors, every form field and the search results.
    pub async fn clear_all(&mut self) {
        self.search.clear_error().await;
        self.error.clear();
        self.form.reset_all(&[]);
        self.search.clear_addresses().await;
    }

    /// The one error shown to the user: the search error, else the local one.
    pub async fn visible_error(&self) -> String {
        let search_error = self.search.state().await.error_message().to_owned();
        if search_error.is_empty() {
            self.error.clone()
        } else {
            search_error
        }
    }

    /// Remove entries by composite id; returns how many were removed.
    pub fn remove_entry(&mut self, id: &EntryId) -> usize {
        self.book.remove(id)
    }

    /// Replace the whole address book.
    pub fn replace_book(&mut self, entries: Vec<AddressBookEntry>) {
        self.book.replace_all(entries);
    }
}

/// Validate the form against the current results and build the entry.
fn build_entry(form: &AddressForm, search: &SearchState) -> Result<AddressBookEntry, PersonError> {
    if form.first_name.is_empty() || form.last_name.is_empty() {
        return Err(PersonError::MissingNames);
    }

    let selected = form
        .selected_address
        .as_deref()
        .filter(|id| !id.is_empty() && !search.addresses().is_empty())
        .ok_or(PersonError::NoSelection)?;

    let found = search
        .addresses()
        .iter()
        .find(|address| address.id == selected)
        .ok_or(PersonError::SelectionNotFound)?;

    Ok(AddressBookEntry::new(
        found.clone(),
        form.first_name.clone(),
        form.last_name.clone(),
    ))
}
