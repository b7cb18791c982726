//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. The store assigns ids
//! (BIGSERIAL), so these wrap `i64` and are only ever constructed
//! from existing values.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type TicketId = Id<markers::Ticket>;
/// let id = TicketId::from_i64(42);
/// assert_eq!(id.as_i64(), 42);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a store-assigned id.
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value.
    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

// Manual impls: derive would put bounds on the marker type.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for staff user ids (`system_user`)
    pub struct User;

    /// Marker for customer ids
    pub struct Customer;

    /// Marker for support ticket ids
    pub struct Ticket;

    /// Marker for ticket message ids
    pub struct Message;

    /// Marker for feedback entry ids
    pub struct Feedback;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type CustomerId = Id<markers::Customer>;
pub type TicketId = Id<markers::Ticket>;
pub type MessageId = Id<markers::Message>;
pub type FeedbackId = Id<markers::Feedback>;
