//! Satchel prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    checkout::{Customer, Field, FieldErrors, Order, OrderItem, validate_form},
    lessons::{Lesson, LessonId},
    projection::{Direction, Sort, SortKey, project},
    session::{Session, SubmitError, View},
};
