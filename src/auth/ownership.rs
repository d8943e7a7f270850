//! # Ownership Check
//!
//! Owner-based access control for mutating operations.
//!
//! ## Invariants
//! - AUTH-OWN1: Value comparison of canonical ids, never reference identity
//! - AUTH-OWN2: Stateless predicate; callers check BEFORE mutating

use uuid::Uuid;

/// A resource with a recorded owner.
pub trait Owned {
    /// The id of the user who owns this resource.
    fn owner_id(&self) -> Uuid;
}

/// Whether `requester_id` may modify the given resource.
///
/// Permitted if and only if the requester is the recorded owner. Callers
/// gate the store mutation on this result (check-then-act): a `false` means
/// the mutation must not be attempted.
pub fn can_modify<T: Owned>(requester_id: Uuid, resource: &T) -> bool {
    requester_id == resource.owner_id()
}
