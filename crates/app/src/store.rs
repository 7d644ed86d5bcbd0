//! Storefront store
//!
//! Drives the `satchel` session against the remote inventory service. Cart
//! mutations apply locally first, then persist the lesson's new capacity;
//! when the remote call fails the local change is reverted through the same
//! guarded cart primitives and the error is surfaced, so local and remote
//! inventory cannot silently diverge.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use satchel::{
    cart::CartError,
    lessons::{Lesson, LessonId},
    session::{Session, SubmitError},
};

use crate::remote::{InventoryService, RemoteError};

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A local cart or catalog precondition failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The remote inventory service call failed; any optimistic local change
    /// has been reverted.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Submission was blocked before reaching the remote service.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// The backend-integrated storefront: one customer session synchronized with
/// the remote inventory service.
pub struct Storefront {
    /// The local session state (catalog, cart, customer, errors, query).
    pub session: Session,

    remote: Arc<dyn InventoryService>,
    search_ticket: u64,
}

impl Storefront {
    /// Create a store over an empty session; call [`Storefront::refresh`] to
    /// load the catalog.
    #[must_use]
    pub fn new(remote: Arc<dyn InventoryService>) -> Self {
        Self {
            session: Session::default(),
            remote,
            search_ticket: 0,
        }
    }

    /// Replace the catalog with the remote lesson list.
    ///
    /// # Errors
    ///
    /// Returns the remote failure; the current catalog is kept.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        let lessons = self.remote.list_lessons().await?;

        debug!(lessons = lessons.len(), "catalog refreshed");

        self.session.catalog.replace(lessons);

        Ok(())
    }

    /// Reserve one space of a lesson and persist the new capacity.
    ///
    /// # Errors
    ///
    /// Returns the local guard error, or the remote failure after reverting
    /// the local reservation.
    #[tracing::instrument(skip(self), fields(lesson = %id))]
    pub async fn reserve(&mut self, id: &LessonId) -> Result<(), StoreError> {
        self.session.reserve(id)?;

        if let Err(err) = self.persist_spaces(id).await {
            warn!(error = %err, "capacity update failed, reverting reservation");

            self.revert_one(id);

            return Err(err);
        }

        Ok(())
    }

    /// Reserve one more space of a lesson already in the cart and persist the
    /// new capacity.
    ///
    /// # Errors
    ///
    /// Returns the local guard error, or the remote failure after reverting
    /// the extra reservation.
    #[tracing::instrument(skip(self), fields(lesson = %id))]
    pub async fn increase(&mut self, id: &LessonId) -> Result<(), StoreError> {
        self.session.increase(id)?;

        if let Err(err) = self.persist_spaces(id).await {
            warn!(error = %err, "capacity update failed, reverting increase");

            self.revert_one(id);

            return Err(err);
        }

        Ok(())
    }

    /// Return one reserved space (no-op at qty 1) and persist the new
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns the local error, or the remote failure after re-taking the
    /// returned space.
    #[tracing::instrument(skip(self), fields(lesson = %id))]
    pub async fn decrease(&mut self, id: &LessonId) -> Result<(), StoreError> {
        let qty = self
            .session
            .cart
            .line(id)
            .map(|line| line.qty)
            .ok_or_else(|| CartError::LineNotFound(id.clone()))?;

        if qty <= 1 {
            return Ok(());
        }

        self.session.decrease(id)?;

        if let Err(err) = self.persist_spaces(id).await {
            warn!(error = %err, "capacity update failed, re-taking returned space");

            if let Err(revert) = self.session.increase(id) {
                warn!(error = %revert, "failed to revert decrease");
            }

            return Err(err);
        }

        Ok(())
    }

    /// Return all reserved spaces of a lesson, drop its cart line, and
    /// persist the new capacity.
    ///
    /// # Errors
    ///
    /// Returns the local error, or the remote failure after re-reserving the
    /// released quantity.
    #[tracing::instrument(skip(self), fields(lesson = %id))]
    pub async fn release(&mut self, id: &LessonId) -> Result<(), StoreError> {
        let line = self
            .session
            .cart
            .release(&mut self.session.catalog, id)?;

        if let Err(err) = self.persist_spaces(id).await {
            warn!(error = %err, qty = line.qty, "capacity update failed, restoring cart line");

            for _ in 0..line.qty {
                if let Err(revert) = self.session.reserve(id) {
                    warn!(error = %revert, "failed to restore released reservation");
                    break;
                }
            }

            return Err(err);
        }

        Ok(())
    }

    /// Update the search query and fetch its results from the service.
    ///
    /// An empty query refetches the full catalog. Responses are applied only
    /// while their ticket is still the latest, so a slow response for an old
    /// query can never overwrite a newer result set.
    ///
    /// # Errors
    ///
    /// Returns the remote failure; the current catalog is kept.
    #[tracing::instrument(skip(self))]
    pub async fn set_query(&mut self, query: &str) -> Result<(), StoreError> {
        self.session.query = query.to_owned();

        let ticket = self.next_search_ticket();
        let trimmed = query.trim();

        let lessons = if trimmed.is_empty() {
            self.remote.list_lessons().await?
        } else {
            self.remote.search_lessons(trimmed.to_owned()).await?
        };

        self.apply_search(ticket, lessons);

        Ok(())
    }

    /// Take the ticket for a new search request, invalidating all earlier
    /// in-flight searches.
    pub fn next_search_ticket(&mut self) -> u64 {
        self.search_ticket += 1;

        self.search_ticket
    }

    /// Apply a search response if its ticket is still the latest; stale
    /// responses are discarded.
    pub fn apply_search(&mut self, ticket: u64, lessons: Vec<Lesson>) {
        if ticket == self.search_ticket {
            self.session.catalog.replace(lessons);
        } else {
            debug!(
                ticket,
                latest = self.search_ticket,
                "discarding stale search response"
            );
        }
    }

    /// Validate the customer, submit the order, and reset the checkout state.
    ///
    /// # Errors
    ///
    /// Returns a validation or remote error; the cart and customer are
    /// preserved for retry in both cases.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<(), StoreError> {
        if !self.session.validate() {
            return Err(SubmitError::Invalid.into());
        }

        let order = self.session.build_order()?;

        let total = order.total;
        let items = order.items.len();

        self.remote.submit_order(order).await?;

        info!(total, items, "order accepted");

        self.session.reset_checkout();

        Ok(())
    }

    async fn persist_spaces(&self, id: &LessonId) -> Result<(), StoreError> {
        let spaces = self
            .session
            .catalog
            .get(id)
            .map_err(CartError::from)?
            .spaces;

        self.remote.update_spaces(id.clone(), spaces).await?;

        debug!(lesson = %id, spaces, "capacity persisted");

        Ok(())
    }

    // Inverse of one guarded reservation; failures only get logged because a
    // revert of a change we just made cannot meaningfully fail.
    fn revert_one(&mut self, id: &LessonId) {
        if let Err(revert) = self
            .session
            .cart
            .unreserve(&mut self.session.catalog, id)
        {
            warn!(error = %revert, "failed to revert reservation");
        }
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("session", &self.session)
            .field("search_ticket", &self.search_ticket)
            .finish_non_exhaustive()
    }
}
