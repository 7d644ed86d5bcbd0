//! Session
//!
//! The explicit application-state object owning the catalog, cart, customer,
//! validation errors, and the current search/sort selection. All mutation
//! goes through methods on this context; nothing is ambient.

use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    catalog::Catalog,
    checkout::{Customer, FieldErrors, Order, validate_form},
    lessons::{Lesson, LessonId},
    projection::{Sort, project},
};

/// Errors gating order submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more customer fields failed validation.
    #[error("Customer details are invalid")]
    Invalid,

    /// There is nothing in the cart to order.
    #[error("The cart is empty")]
    EmptyCart,
}

/// The logical page the customer is on.
///
/// Actual routing and rendering live in the presentation layer; this only
/// captures the checkout state machine's "back to the catalog on success".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Browsing the catalog.
    #[default]
    Lessons,

    /// Reviewing the cart.
    Cart,

    /// Entering customer details.
    Checkout,
}

/// One customer's storefront session.
#[derive(Debug, Default)]
pub struct Session {
    /// The lesson catalog with live capacity.
    pub catalog: Catalog,

    /// The reservation ledger.
    pub cart: Cart,

    /// Customer details for the current checkout attempt.
    pub customer: Customer,

    /// Validation messages from the last `validate` pass.
    pub errors: FieldErrors,

    /// Current search query.
    pub query: String,

    /// Current sort selection.
    pub sort: Option<Sort>,

    /// Current logical page.
    pub view: View,
}

impl Session {
    /// Start a session over the given catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// The catalog filtered by the current query and sorted by the current
    /// selection, for display.
    #[must_use]
    pub fn visible_lessons(&self) -> Vec<&Lesson> {
        project(&self.catalog, &self.query, self.sort)
    }

    /// Reserve one space of a lesson.
    ///
    /// # Errors
    ///
    /// See [`Cart::reserve`].
    pub fn reserve(&mut self, id: &LessonId) -> Result<(), CartError> {
        self.cart.reserve(&mut self.catalog, id)
    }

    /// Reserve one more space of a lesson already in the cart.
    ///
    /// # Errors
    ///
    /// See [`Cart::increase`].
    pub fn increase(&mut self, id: &LessonId) -> Result<(), CartError> {
        self.cart.increase(&mut self.catalog, id)
    }

    /// Return one reserved space (no-op at qty 1).
    ///
    /// # Errors
    ///
    /// See [`Cart::decrease`].
    pub fn decrease(&mut self, id: &LessonId) -> Result<(), CartError> {
        self.cart.decrease(&mut self.catalog, id)
    }

    /// Return all reserved spaces of a lesson and drop its line.
    ///
    /// # Errors
    ///
    /// See [`Cart::release`].
    pub fn release(&mut self, id: &LessonId) -> Result<(), CartError> {
        self.cart.release(&mut self.catalog, id).map(|_line| ())
    }

    /// Run the field validators over the current customer, storing the
    /// resulting messages. Returns true iff every field is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_form(&self.customer);

        self.errors.is_clear()
    }

    /// Build the order payload for the current cart and customer.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::EmptyCart` when there is nothing to order.
    pub fn build_order(&self) -> Result<Order, SubmitError> {
        if self.cart.is_empty() {
            return Err(SubmitError::EmptyCart);
        }

        Ok(Order::from_cart(&self.customer, &self.cart))
    }

    /// Submit the order locally, for storefronts running without a remote
    /// backend (submission always succeeds once validation passes).
    ///
    /// On success the cart, customer, and errors are reset and the view
    /// returns to the catalog; the order snapshot is returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Invalid` when validation fails (messages are
    /// stored on the session) or `SubmitError::EmptyCart`; the cart and
    /// customer are preserved in both cases.
    pub fn submit(&mut self) -> Result<Order, SubmitError> {
        if !self.validate() {
            return Err(SubmitError::Invalid);
        }

        let order = self.build_order()?;

        self.reset_checkout();

        Ok(order)
    }

    /// Clear the cart, customer, and errors after a successful submission and
    /// return to the catalog view.
    pub fn reset_checkout(&mut self) {
        self.cart.clear();
        self.customer = Customer::default();
        self.errors.clear();
        self.view = View::Lessons;
    }
}
