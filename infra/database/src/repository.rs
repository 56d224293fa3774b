use crate::error::DatabaseError;

/// Name-keyed persistence contract used by the domain services.
///
/// Implementors guarantee that [`Repository::list`] yields records in the order they were
/// inserted, and that a name, once taken, is never handed out again.
pub trait Repository<R: 'static> {
    fn find_by_name(&self, name: &str) -> Option<&R>;

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut R>;

    /// Stores a record under a new `name`.
    ///
    /// # Errors
    /// [`DatabaseError::Conflict`] when `name` is already taken; nothing is written.
    fn insert(&mut self, name: &str, record: R) -> Result<&R, DatabaseError>;

    fn list(&self) -> impl Iterator<Item = &R>;
}
