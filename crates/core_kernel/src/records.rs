//! Record controller for list/create/edit/delete flows
//!
//! Every persisted entity (customers, estimates, sales orders, employees,
//! salary setups) follows the same flow, driven here by one controller
//! parameterised over the record type:
//!
//! ```text
//! List --begin_create--> Create --save--> List
//! List --begin_edit----> Edit   --save--> List
//! List --request_delete--> ConfirmDelete --confirm_delete--> List
//!                                        --cancel----------> List
//! ```
//!
//! Saves validate the required field first and abort with no write when it
//! is missing. Successful saves and deletes load the whole collection, mutate
//! it, and write it back in full.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use validator::{Validate, ValidationErrors};

use crate::ports::{CollectionPort, PortError};

/// A record kept in a named collection
pub trait Record: Clone + Serialize + DeserializeOwned + Validate + Send + Sync + 'static {
    /// Identifier type
    type Id: Copy + Eq + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Storage key of the collection holding this record type
    const COLLECTION: &'static str;

    /// Human-readable entity label used in messages
    const ENTITY: &'static str;

    /// Returns the record identifier
    fn id(&self) -> Self::Id;

    /// Tidies user input (e.g. trims the required field) before validation
    fn normalize(&mut self) {}

    /// Restores fields that become immutable once the record exists
    fn preserve_on_edit(&mut self, _stored: &Self) {}
}

/// Where the controller currently is in the list/form flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<Id> {
    List,
    Create,
    Edit(Id),
    ConfirmDelete(Id),
}

impl<Id> ViewState<Id> {
    fn label(&self) -> &'static str {
        match self {
            ViewState::List => "list",
            ViewState::Create => "create",
            ViewState::Edit(_) => "edit",
            ViewState::ConfirmDelete(_) => "confirm-delete",
        }
    }
}

/// Errors raised by the record controller
#[derive(Debug, Error)]
pub enum RecordError {
    /// The required field check rejected the submission
    #[error("{entity} rejected: {}", .errors.join("; "))]
    Validation {
        entity: &'static str,
        errors: Vec<String>,
    },

    /// A create collided with an existing id
    #[error("{entity} {id} already exists")]
    DuplicateId {
        entity: &'static str,
        id: String,
    },

    /// The requested transition is not allowed from the current state
    #[error("Cannot {action} while in {state} state")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },

    #[error(transparent)]
    Port(#[from] PortError),
}

impl RecordError {
    fn from_validation(entity: &'static str, errors: &ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        messages.sort();
        RecordError::Validation { entity, errors: messages }
    }

    /// Returns true when the submission was rejected by validation
    pub fn is_validation(&self) -> bool {
        matches!(self, RecordError::Validation { .. })
    }
}

/// Drives the list/form/confirm-delete flow for one record type
pub struct RecordController<R: Record> {
    port: Arc<dyn CollectionPort<R>>,
    state: ViewState<R::Id>,
}

impl<R: Record> RecordController<R> {
    /// Creates a controller in the List state
    pub fn new(port: Arc<dyn CollectionPort<R>>) -> Self {
        Self {
            port,
            state: ViewState::List,
        }
    }

    /// Returns the current view state
    pub fn state(&self) -> ViewState<R::Id> {
        self.state
    }

    /// Reloads the collection for the list view
    pub async fn list(&self) -> Result<Vec<R>, RecordError> {
        Ok(self.port.load().await?)
    }

    /// Loads a single record
    pub async fn find(&self, id: R::Id) -> Result<R, RecordError> {
        self.port
            .load()
            .await?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| PortError::not_found(R::ENTITY, id).into())
    }

    /// Opens the create form
    pub fn begin_create(&mut self) -> Result<(), RecordError> {
        self.require_list("create")?;
        self.state = ViewState::Create;
        Ok(())
    }

    /// Opens the edit form for an existing record and returns it for prefill
    pub async fn begin_edit(&mut self, id: R::Id) -> Result<R, RecordError> {
        self.require_list("edit")?;
        let record = self.find(id).await?;
        self.state = ViewState::Edit(id);
        Ok(record)
    }

    /// Validates and persists the submitted record, then returns to the list
    ///
    /// # Errors
    ///
    /// - `Validation` when the required field is empty; nothing is written
    ///   and the form stays open
    /// - `DuplicateId` when creating a record whose id is already stored
    /// - `Port(NotFound)` when the record being edited has disappeared
    pub async fn save(&mut self, mut record: R) -> Result<R, RecordError> {
        let editing = match self.state {
            ViewState::Create => None,
            ViewState::Edit(id) => Some(id),
            other => {
                return Err(RecordError::InvalidState {
                    action: "save",
                    state: other.label(),
                })
            }
        };

        record.normalize();
        if let Err(errors) = record.validate() {
            let error = RecordError::from_validation(R::ENTITY, &errors);
            warn!(entity = R::ENTITY, %error, "submission rejected");
            return Err(error);
        }

        let mut records = self.port.load().await?;

        match editing {
            None => {
                if records.iter().any(|r| r.id() == record.id()) {
                    return Err(RecordError::DuplicateId {
                        entity: R::ENTITY,
                        id: record.id().to_string(),
                    });
                }
                records.push(record.clone());
            }
            Some(id) => {
                if record.id() != id {
                    return Err(RecordError::InvalidState {
                        action: "change the id of",
                        state: "edit",
                    });
                }
                let slot = records
                    .iter_mut()
                    .find(|r| r.id() == id)
                    .ok_or_else(|| PortError::not_found(R::ENTITY, id))?;
                record.preserve_on_edit(slot);
                *slot = record.clone();
            }
        }

        self.port.save_all(&records).await?;
        info!(
            entity = R::ENTITY,
            id = %record.id(),
            collection = R::COLLECTION,
            count = records.len(),
            "record saved"
        );

        self.state = ViewState::List;
        Ok(record)
    }

    /// Asks for confirmation before deleting a record
    pub fn request_delete(&mut self, id: R::Id) -> Result<(), RecordError> {
        self.require_list("delete")?;
        self.state = ViewState::ConfirmDelete(id);
        Ok(())
    }

    /// Deletes the record awaiting confirmation and returns it
    ///
    /// Exactly one record with the matching id is removed; every other record
    /// is written back unchanged and in its original order.
    pub async fn confirm_delete(&mut self) -> Result<R, RecordError> {
        let id = match self.state {
            ViewState::ConfirmDelete(id) => id,
            other => {
                return Err(RecordError::InvalidState {
                    action: "confirm delete",
                    state: other.label(),
                })
            }
        };

        let mut records = self.port.load().await?;
        let position = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| PortError::not_found(R::ENTITY, id))?;
        let removed = records.remove(position);

        self.port.save_all(&records).await?;
        info!(entity = R::ENTITY, %id, remaining = records.len(), "record deleted");

        self.state = ViewState::List;
        Ok(removed)
    }

    /// Abandons the current form or confirmation and returns to the list
    pub fn cancel(&mut self) {
        self.state = ViewState::List;
    }

    fn require_list(&self, action: &'static str) -> Result<(), RecordError> {
        if self.state != ViewState::List {
            return Err(RecordError::InvalidState {
                action,
                state: self.state.label(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::DomainPort;
    use async_trait::async_trait;
    use serde::Deserialize;
    use tokio::sync::RwLock;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
    struct Memo {
        id: u32,
        #[validate(length(min = 1, message = "title is required"))]
        title: String,
        body: String,
    }

    impl Record for Memo {
        type Id = u32;
        const COLLECTION: &'static str = "memos";
        const ENTITY: &'static str = "Memo";

        fn id(&self) -> u32 {
            self.id
        }

        fn normalize(&mut self) {
            self.title = self.title.trim().to_string();
        }

        fn preserve_on_edit(&mut self, stored: &Self) {
            self.body = stored.body.clone();
        }
    }

    #[derive(Default)]
    struct VecPort {
        records: RwLock<Vec<Memo>>,
        writes: RwLock<u32>,
    }

    impl DomainPort for VecPort {}

    #[async_trait]
    impl CollectionPort<Memo> for VecPort {
        fn key(&self) -> &str {
            "memos"
        }

        async fn load(&self) -> Result<Vec<Memo>, PortError> {
            Ok(self.records.read().await.clone())
        }

        async fn save_all(&self, records: &[Memo]) -> Result<(), PortError> {
            *self.records.write().await = records.to_vec();
            *self.writes.write().await += 1;
            Ok(())
        }
    }

    fn memo(id: u32, title: &str) -> Memo {
        Memo { id, title: title.to_string(), body: format!("body {}", id) }
    }

    async fn seeded(records: Vec<Memo>) -> (Arc<VecPort>, RecordController<Memo>) {
        let port = Arc::new(VecPort::default());
        *port.records.write().await = records;
        let controller = RecordController::new(port.clone() as Arc<dyn CollectionPort<Memo>>);
        (port, controller)
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (_, mut controller) = seeded(vec![]).await;

        controller.begin_create().unwrap();
        assert_eq!(controller.state(), ViewState::Create);

        controller.save(memo(1, "  First  ")).await.unwrap();
        assert_eq!(controller.state(), ViewState::List);

        let listed = controller.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "First");
    }

    #[tokio::test]
    async fn test_blank_required_field_aborts_without_write() {
        let (port, mut controller) = seeded(vec![]).await;

        controller.begin_create().unwrap();
        let err = controller.save(memo(1, "   ")).await.unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("title is required"));
        assert_eq!(controller.state(), ViewState::Create);
        assert_eq!(*port.writes.read().await, 0);
    }

    #[tokio::test]
    async fn test_edit_replaces_in_place_and_preserves_locked_fields() {
        let (_, mut controller) = seeded(vec![memo(1, "a"), memo(2, "b"), memo(3, "c")]).await;

        let mut draft = controller.begin_edit(2).await.unwrap();
        draft.title = "bee".to_string();
        draft.body = "changed".to_string();
        controller.save(draft).await.unwrap();

        let listed = controller.list().await.unwrap();
        assert_eq!(listed.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(listed[1].title, "bee");
        assert_eq!(listed[1].body, "body 2");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let (_, mut controller) = seeded(vec![memo(1, "a")]).await;

        controller.begin_create().unwrap();
        let err = controller.save(memo(1, "again")).await.unwrap_err();
        assert!(matches!(err, RecordError::DuplicateId { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_record() {
        let originals = vec![memo(1, "a"), memo(2, "b"), memo(3, "c")];
        let (_, mut controller) = seeded(originals.clone()).await;

        controller.request_delete(2).unwrap();
        assert_eq!(controller.state(), ViewState::ConfirmDelete(2));

        let removed = controller.confirm_delete().await.unwrap();
        assert_eq!(removed.id, 2);

        let remaining = controller.list().await.unwrap();
        let expected: Vec<Memo> = originals.into_iter().filter(|m| m.id != 2).collect();
        assert_eq!(
            serde_json::to_string(&remaining).unwrap(),
            serde_json::to_string(&expected).unwrap()
        );
    }

    #[tokio::test]
    async fn test_cancel_delete_keeps_collection() {
        let (port, mut controller) = seeded(vec![memo(1, "a")]).await;

        controller.request_delete(1).unwrap();
        controller.cancel();

        assert_eq!(controller.state(), ViewState::List);
        assert_eq!(controller.list().await.unwrap().len(), 1);
        assert_eq!(*port.writes.read().await, 0);
    }

    #[tokio::test]
    async fn test_confirm_delete_requires_confirmation_state() {
        let (_, mut controller) = seeded(vec![memo(1, "a")]).await;
        let err = controller.confirm_delete().await.unwrap_err();
        assert!(matches!(err, RecordError::InvalidState { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_record_is_not_found() {
        let (_, mut controller) = seeded(vec![memo(1, "a")]).await;

        controller.request_delete(9).unwrap();
        let err = controller.confirm_delete().await.unwrap_err();
        assert!(matches!(err, RecordError::Port(ref e) if e.is_not_found()));
    }
}
