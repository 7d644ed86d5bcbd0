//! Cart

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    lessons::{Lesson, LessonId},
};

/// Errors related to cart reservations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The referenced lesson is missing from the catalog (stale reference).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The lesson has no remaining spaces to reserve.
    #[error("Lesson {0} has no spaces left")]
    OutOfCapacity(LessonId),

    /// The cart holds no line for the given lesson.
    #[error("Lesson {0} is not in the cart")]
    LineNotFound(LessonId),
}

/// One customer's in-progress reservation of some quantity of one lesson.
///
/// Display fields are a snapshot of the lesson taken at first reservation;
/// `qty` never drops below 1 (removal is explicit via [`Cart::release`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Id of the reserved lesson.
    pub id: LessonId,

    /// Subject snapshot.
    pub subject: String,

    /// Location snapshot.
    pub location: String,

    /// Price snapshot.
    pub price: u64,

    /// Reserved quantity.
    pub qty: u64,
}

impl CartLine {
    fn new(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.clone(),
            subject: lesson.subject.clone(),
            location: lesson.location.clone(),
            price: lesson.price,
            qty: 1,
        }
    }
}

/// The reservation ledger: cart lines kept in lockstep with lesson capacity.
///
/// Every mutation here has a mirrored, opposite mutation on the catalog, so
/// that for each lesson `spaces + Σ qty` stays equal to the capacity the
/// lesson was loaded with. All mutators take the catalog explicitly.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    index: FxHashMap<LessonId, usize>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve one space of a lesson, creating its cart line on first call.
    ///
    /// # Errors
    ///
    /// Returns `CartError::OutOfCapacity` when the lesson has no spaces left,
    /// or `CartError::Catalog` when the id is unknown to the catalog.
    pub fn reserve(&mut self, catalog: &mut Catalog, id: &LessonId) -> Result<(), CartError> {
        let lesson = catalog.get_mut(id)?;

        if lesson.spaces == 0 {
            return Err(CartError::OutOfCapacity(id.clone()));
        }

        lesson.spaces -= 1;

        if let Some(position) = self.index.get(id).copied() {
            if let Some(line) = self.lines.get_mut(position) {
                line.qty += 1;
            }
        } else {
            self.index.insert(id.clone(), self.lines.len());
            self.lines.push(CartLine::new(lesson));
        }

        Ok(())
    }

    /// Reserve one more space of a lesson already in the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` when the lesson has no cart line,
    /// otherwise the same errors as [`Cart::reserve`].
    pub fn increase(&mut self, catalog: &mut Catalog, id: &LessonId) -> Result<(), CartError> {
        if !self.index.contains_key(id) {
            return Err(CartError::LineNotFound(id.clone()));
        }

        self.reserve(catalog, id)
    }

    /// Return one reserved space to the lesson.
    ///
    /// A no-op at `qty == 1`: the last unit is only given back by an explicit
    /// [`Cart::release`].
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` when the lesson has no cart line, or
    /// `CartError::Catalog` when the id is unknown to the catalog.
    pub fn decrease(&mut self, catalog: &mut Catalog, id: &LessonId) -> Result<(), CartError> {
        let position = self.line_position(id)?;

        let qty = self
            .lines
            .get(position)
            .map(|line| line.qty)
            .ok_or_else(|| CartError::LineNotFound(id.clone()))?;

        if qty <= 1 {
            return Ok(());
        }

        catalog.get_mut(id)?.spaces += 1;

        if let Some(line) = self.lines.get_mut(position) {
            line.qty -= 1;
        }

        Ok(())
    }

    /// Give back the full reserved quantity and remove the cart line.
    ///
    /// Returns the removed line.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` when the lesson has no cart line, or
    /// `CartError::Catalog` when the id is unknown to the catalog.
    pub fn release(&mut self, catalog: &mut Catalog, id: &LessonId) -> Result<CartLine, CartError> {
        let position = self.line_position(id)?;
        let lesson = catalog.get_mut(id)?;

        let line = self.lines.remove(position);
        lesson.spaces += line.qty;

        self.reindex();

        Ok(line)
    }

    /// Give back exactly one reserved space, removing the line at `qty == 1`.
    ///
    /// The exact inverse of one guarded [`Cart::reserve`], used to compensate
    /// an optimistic reservation whose remote confirmation failed.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` when the lesson has no cart line, or
    /// `CartError::Catalog` when the id is unknown to the catalog.
    pub fn unreserve(&mut self, catalog: &mut Catalog, id: &LessonId) -> Result<(), CartError> {
        let position = self.line_position(id)?;

        let qty = self
            .lines
            .get(position)
            .map(|line| line.qty)
            .ok_or_else(|| CartError::LineNotFound(id.clone()))?;

        catalog.get_mut(id)?.spaces += 1;

        if qty > 1 {
            if let Some(line) = self.lines.get_mut(position) {
                line.qty -= 1;
            }
        } else {
            self.lines.remove(position);
            self.reindex();
        }

        Ok(())
    }

    /// Total reserved quantity across all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| line.qty).sum()
    }

    /// Total price of all reserved spaces.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines.iter().map(|line| line.price * line.qty).sum()
    }

    /// Get the cart line for a lesson, if any.
    #[must_use]
    pub fn line(&self, id: &LessonId) -> Option<&CartLine> {
        self.index
            .get(id)
            .and_then(|position| self.lines.get(*position))
    }

    /// Iterate over the cart lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Get the number of distinct lessons in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop all lines without touching the catalog (reserved spaces are sold,
    /// not returned). Used after a successful checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.index.clear();
    }

    fn line_position(&self, id: &LessonId) -> Result<usize, CartError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| CartError::LineNotFound(id.clone()))
    }

    fn reindex(&mut self) {
        self.index = self
            .lines
            .iter()
            .enumerate()
            .map(|(position, line)| (line.id.clone(), position))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::fixtures::seed_lessons;

    use super::*;

    fn setup() -> (Catalog, Cart) {
        (Catalog::from_lessons(seed_lessons()), Cart::new())
    }

    fn spaces(catalog: &Catalog, id: u64) -> u64 {
        catalog
            .get(&LessonId::Local(id))
            .map(|lesson| lesson.spaces)
            .expect("lesson should exist")
    }

    #[test]
    fn reserve_creates_line_and_takes_space() -> TestResult {
        let (mut catalog, mut cart) = setup();
        let maths = LessonId::Local(1);

        cart.reserve(&mut catalog, &maths)?;

        assert_eq!(spaces(&catalog, 1), 4);

        let line = cart.line(&maths).expect("line should exist");

        assert_eq!(line.qty, 1);
        assert_eq!(line.subject, "Mathematics");
        assert_eq!(line.price, 150);

        Ok(())
    }

    #[test]
    fn reserve_existing_line_increments_qty() -> TestResult {
        let (mut catalog, mut cart) = setup();
        let maths = LessonId::Local(1);

        cart.reserve(&mut catalog, &maths)?;
        cart.reserve(&mut catalog, &maths)?;

        assert_eq!(cart.len(), 1, "one line per lesson");
        assert_eq!(cart.line(&maths).map(|line| line.qty), Some(2));
        assert_eq!(spaces(&catalog, 1), 3);

        Ok(())
    }

    #[test]
    fn reserve_at_zero_capacity_is_rejected() -> TestResult {
        let (mut catalog, mut cart) = setup();
        let science = LessonId::Local(3);

        for _ in 0..3 {
            cart.reserve(&mut catalog, &science)?;
        }

        assert_eq!(spaces(&catalog, 3), 0);

        let result = cart.reserve(&mut catalog, &science);

        assert!(
            matches!(result, Err(CartError::OutOfCapacity(LessonId::Local(3)))),
            "expected OutOfCapacity, got {result:?}"
        );
        assert_eq!(spaces(&catalog, 3), 0, "rejection must not touch capacity");
        assert_eq!(cart.line(&science).map(|line| line.qty), Some(3));

        Ok(())
    }

    #[test]
    fn reserve_unknown_lesson_is_an_error() {
        let (mut catalog, mut cart) = setup();

        let result = cart.reserve(&mut catalog, &LessonId::Local(99));

        assert!(
            matches!(result, Err(CartError::Catalog(_))),
            "expected a catalog lookup error, got {result:?}"
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn increase_without_line_is_an_error() {
        let (mut catalog, mut cart) = setup();

        let result = cart.increase(&mut catalog, &LessonId::Local(1));

        assert!(
            matches!(result, Err(CartError::LineNotFound(LessonId::Local(1)))),
            "expected LineNotFound, got {result:?}"
        );
        assert_eq!(spaces(&catalog, 1), 5, "capacity must be untouched");
    }

    #[test]
    fn decrease_at_qty_one_is_a_noop() -> TestResult {
        let (mut catalog, mut cart) = setup();
        let maths = LessonId::Local(1);

        cart.reserve(&mut catalog, &maths)?;
        cart.decrease(&mut catalog, &maths)?;

        assert_eq!(cart.line(&maths).map(|line| line.qty), Some(1));
        assert_eq!(spaces(&catalog, 1), 4);

        Ok(())
    }

    #[test]
    fn release_returns_full_quantity_and_removes_line() -> TestResult {
        let (mut catalog, mut cart) = setup();
        let maths = LessonId::Local(1);

        cart.reserve(&mut catalog, &maths)?;
        cart.increase(&mut catalog, &maths)?;
        cart.increase(&mut catalog, &maths)?;

        let line = cart.release(&mut catalog, &maths)?;

        assert_eq!(line.qty, 3);
        assert_eq!(spaces(&catalog, 1), 5);
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn reserve_then_release_round_trips() -> TestResult {
        let (mut catalog, mut cart) = setup();
        let art = LessonId::Local(4);
        let before = spaces(&catalog, 4);

        cart.reserve(&mut catalog, &art)?;
        cart.release(&mut catalog, &art)?;

        assert_eq!(spaces(&catalog, 4), before);
        assert!(cart.line(&art).is_none());

        Ok(())
    }

    #[test]
    fn unreserve_is_the_exact_inverse_of_reserve() -> TestResult {
        let (mut catalog, mut cart) = setup();
        let music = LessonId::Local(5);

        cart.reserve(&mut catalog, &music)?;
        cart.reserve(&mut catalog, &music)?;
        cart.unreserve(&mut catalog, &music)?;

        assert_eq!(cart.line(&music).map(|line| line.qty), Some(1));
        assert_eq!(spaces(&catalog, 5), 5);

        cart.unreserve(&mut catalog, &music)?;

        assert!(cart.line(&music).is_none(), "line removed at qty 1");
        assert_eq!(spaces(&catalog, 5), 6);

        Ok(())
    }

    #[test]
    fn derived_totals() -> TestResult {
        let (mut catalog, mut cart) = setup();

        cart.reserve(&mut catalog, &LessonId::Local(1))?;
        cart.increase(&mut catalog, &LessonId::Local(1))?;
        cart.reserve(&mut catalog, &LessonId::Local(2))?;

        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), 2 * 150 + 120);

        Ok(())
    }

    #[test]
    fn conservation_holds_across_mixed_operations() -> TestResult {
        let (mut catalog, mut cart) = setup();
        let history = LessonId::Local(6);
        let original = spaces(&catalog, 6);

        cart.reserve(&mut catalog, &history)?;
        cart.increase(&mut catalog, &history)?;
        cart.increase(&mut catalog, &history)?;
        cart.decrease(&mut catalog, &history)?;
        cart.unreserve(&mut catalog, &history)?;

        let reserved = cart.line(&history).map(|line| line.qty).unwrap_or(0);

        assert_eq!(
            spaces(&catalog, 6) + reserved,
            original,
            "spaces + reserved qty must equal original capacity"
        );

        Ok(())
    }

    #[test]
    fn release_reindexes_remaining_lines() -> TestResult {
        let (mut catalog, mut cart) = setup();

        cart.reserve(&mut catalog, &LessonId::Local(1))?;
        cart.reserve(&mut catalog, &LessonId::Local(2))?;
        cart.reserve(&mut catalog, &LessonId::Local(3))?;

        cart.release(&mut catalog, &LessonId::Local(1))?;

        assert_eq!(cart.line(&LessonId::Local(2)).map(|line| line.qty), Some(1));
        assert_eq!(cart.line(&LessonId::Local(3)).map(|line| line.qty), Some(1));
        assert_eq!(cart.len(), 2);

        Ok(())
    }

    // The end-to-end scenario: Mathematics starts at 5 spaces.
    #[test]
    fn full_reservation_lifecycle() -> TestResult {
        let (mut catalog, mut cart) = setup();
        let maths = LessonId::Local(1);

        cart.reserve(&mut catalog, &maths)?;
        assert_eq!(spaces(&catalog, 1), 4);
        assert_eq!(cart.line(&maths).map(|line| line.qty), Some(1));

        cart.increase(&mut catalog, &maths)?;
        cart.increase(&mut catalog, &maths)?;
        assert_eq!(spaces(&catalog, 1), 2);
        assert_eq!(cart.line(&maths).map(|line| line.qty), Some(3));

        cart.decrease(&mut catalog, &maths)?;
        assert_eq!(spaces(&catalog, 1), 3);
        assert_eq!(cart.line(&maths).map(|line| line.qty), Some(2));

        cart.release(&mut catalog, &maths)?;
        assert_eq!(spaces(&catalog, 1), 5);
        assert!(cart.is_empty());

        Ok(())
    }
}
