//! Specification - composable boolean predicates over a single item.
//!
//! A specification answers one question about one item. Bigger questions are
//! built by combining small ones with [`Specification::and`] and
//! [`Specification::or`]. Specifications are stateless and pure: calling
//! `is_satisfied_by` has no side effects and never panics, so composites may
//! short-circuit freely without changing the outcome.

mod product;

pub use product::{
    AvailabilitySpecification, BrandSpecification, CategorySpecification,
    ConditionSpecification, FreeShippingSpecification, NameSpecification,
    PriceRangeSpecification, RatingRangeSpecification, SpecificationsSpecification,
};

/// A boolean predicate over `T`, composable with `and` / `or`.
pub trait Specification<T> {
    fn is_satisfied_by(&self, item: &T) -> bool;

    /// A specification satisfied iff both `self` and `other` are.
    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And {
            left: self,
            right: other,
        }
    }

    /// A specification satisfied iff either `self` or `other` is.
    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or {
            left: self,
            right: other,
        }
    }
}

/// Conjunction of two specifications.
#[derive(Debug, Clone)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<T, L, R> Specification<T> for And<L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, item: &T) -> bool {
        self.left.is_satisfied_by(item) && self.right.is_satisfied_by(item)
    }
}

/// Disjunction of two specifications.
#[derive(Debug, Clone)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<T, L, R> Specification<T> for Or<L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, item: &T) -> bool {
        self.left.is_satisfied_by(item) || self.right.is_satisfied_by(item)
    }
}
