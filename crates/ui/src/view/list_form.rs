use super::Resource;
use shared::validation::field_messages;
use std::{collections::BTreeMap, fmt::Display};
use thiserror::Error;
use tracing::{error, info};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update(i32),
}

/// Everything a submission needs once the view lock is released.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket<F> {
    pub mutation: Mutation,
    pub form: F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Refusal {
    #[error("another change is still in flight")]
    Pending,
    #[error("the form has validation errors")]
    Invalid,
}

/// Local state of one list+form page.
///
/// Mutations run in two phases: `begin_*` decides under the lock and hands
/// back what the network call needs, `finish_*` applies the outcome. Local
/// rows only change on success.
pub struct ListFormView<R: Resource> {
    items: Vec<R::Record>,
    loaded: bool,
    editing: Option<i32>,
    form: R::Form,
    errors: BTreeMap<String, String>,
    pending: bool,
    generation: u64,
}

impl<R: Resource> Default for ListFormView<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ListFormView<R> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            editing: None,
            form: R::Form::default(),
            errors: BTreeMap::new(),
            pending: false,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[R::Record] {
        &self.items
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn editing(&self) -> Option<i32> {
        self.editing
    }

    pub fn form(&self) -> &R::Form {
        &self.form
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn load(&mut self, items: Vec<R::Record>) {
        self.items = items;
        self.loaded = true;
    }

    pub fn begin_submit(&mut self, form: R::Form) -> Result<SubmitTicket<R::Form>, Refusal> {
        if self.pending {
            return Err(Refusal::Pending);
        }

        let outcome = form.validate();
        self.form = form;

        if let Err(errors) = outcome {
            self.errors = field_messages(&errors);
            return Err(Refusal::Invalid);
        }

        self.errors.clear();
        self.pending = true;
        self.generation += 1;

        let mutation = match self.editing {
            Some(id) => Mutation::Update(id),
            None => Mutation::Create,
        };

        Ok(SubmitTicket {
            mutation,
            form: self.form.clone(),
        })
    }

    /// `outcome` carries the re-fetched collection on success.
    pub fn finish_submit<E: Display>(&mut self, outcome: Result<Vec<R::Record>, E>) -> bool {
        self.pending = false;

        match outcome {
            Ok(items) => {
                info!("✅ Saved {} ({} rows now)", R::NAME, items.len());
                self.load(items);
                self.reset_form();
                true
            }
            Err(e) => {
                error!("❌ Failed to save {}: {e}", R::NAME);
                false
            }
        }
    }

    pub fn edit(&mut self, id: i32) -> bool {
        match self.items.iter().find(|record| R::id(record) == id) {
            Some(record) => {
                self.form = R::edit_form(record);
                self.editing = Some(id);
                self.errors.clear();
                true
            }
            None => false,
        }
    }

    /// Targets an existing record without loading it into the form, for a
    /// submission that already carries the values.
    pub fn set_editing(&mut self, id: Option<i32>) {
        self.editing = id;
    }

    pub fn begin_delete(&mut self, id: i32) -> Result<i32, Refusal> {
        if self.pending {
            return Err(Refusal::Pending);
        }

        self.pending = true;
        self.generation += 1;
        Ok(id)
    }

    pub fn finish_delete<E: Display>(&mut self, id: i32, outcome: Result<(), E>) -> bool {
        self.pending = false;

        match outcome {
            Ok(()) => {
                self.items.retain(|record| R::id(record) != id);
                if self.editing == Some(id) {
                    self.reset_form();
                }
                info!("🗑️ Deleted {} {id}", R::NAME);
                true
            }
            Err(e) => {
                error!("❌ Failed to delete {} {id}: {e}", R::NAME);
                false
            }
        }
    }

    fn reset_form(&mut self) {
        self.editing = None;
        self.form = R::Form::default();
        self.errors.clear();
    }
}
