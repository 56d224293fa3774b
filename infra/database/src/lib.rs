//! # Database Infrastructure
//!
//! An embedded, in-memory record store for the zoo services.
//!
//! ## Key Features
//! - **Ordered tables**: [`Table`] keeps records in first-insertion order under unique names.
//! - **Repository contract**: services talk to [`Repository`], not to a concrete table.
//! - **Serialized writes**: every [`Database::transaction`] holds the exclusive lock for
//!   its whole read-check-write sequence, so two writers never interleave.
//!
//! Writes made inside a transaction are applied in place. A transaction that returns an
//! error keeps whatever it already wrote; callers decide what to touch before failing.
//!
//! ## Example
//!
//! ```rust
//! use zoo_database::{Database, DatabaseError, Repository, Table};
//!
//! #[derive(Debug)]
//! struct Kennels {
//!     dogs: Table<String>,
//! }
//!
//! let db = Database::builder()
//!     .name("kennels")
//!     .schema(Kennels { dogs: Table::new("dogs") })
//!     .init()?;
//!
//! db.transaction(|k| k.dogs.insert("rex", "Rex".to_owned()).map(|_| ()))?;
//! assert_eq!(db.read(|k| k.dogs.list().count()), 1);
//! # Ok::<(), DatabaseError>(())
//! ```

mod error;
mod repository;
mod table;

pub use crate::error::{DatabaseError, DatabaseErrorExt};
pub use crate::repository::Repository;
pub use crate::table::Table;

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{info, trace};

/// Shared state of a [`Database`] handle.
pub struct DatabaseInner<S> {
    name: String,
    state: RwLock<S>,
}

impl<S: fmt::Debug> fmt::Debug for DatabaseInner<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseInner")
            .field("name", &self.name)
            .field("state", &*self.state.read())
            .finish()
    }
}

impl<S> Drop for DatabaseInner<S> {
    fn drop(&mut self) {
        info!(db = %self.name, "Database handle dropped");
    }
}

/// Cheap-to-clone handle over a schema `S` (usually a struct of [`Table`]s).
pub struct Database<S> {
    inner: Arc<DatabaseInner<S>>,
}

impl<S> Clone for Database<S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S: fmt::Debug> fmt::Debug for Database<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database").field("inner", &self.inner).finish()
    }
}

impl<S> Database<S> {
    /// Creates a new [`DatabaseBuilder`].
    pub const fn builder() -> DatabaseBuilder<S> {
        DatabaseBuilder { name: None, schema: None }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Runs `f` under the shared lock. Concurrent readers do not block each other.
    pub fn read<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        let guard = self.inner.state.read();
        f(&guard)
    }

    /// Runs `f` as one serialized unit of work under the exclusive lock.
    ///
    /// # Errors
    /// Propagates whatever `f` returns; nothing written before the error is undone.
    pub fn transaction<T, E>(&self, f: impl FnOnce(&mut S) -> Result<T, E>) -> Result<T, E> {
        let mut guard = self.inner.state.write();
        trace!(db = %self.inner.name, "Transaction started");
        let outcome = f(&mut guard);
        trace!(db = %self.inner.name, committed = outcome.is_ok(), "Transaction finished");
        outcome
    }
}

/// Fluent builder for a [`Database`].
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct DatabaseBuilder<S> {
    name: Option<String>,
    schema: Option<S>,
}

impl<S> DatabaseBuilder<S> {
    /// Label used in logs.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Initial contents of the store.
    pub fn schema(mut self, schema: S) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Consumes the builder.
    ///
    /// # Errors
    /// [`DatabaseError::Validation`] when the name is missing or blank, or no schema was given.
    pub fn init(self) -> Result<Database<S>, DatabaseError> {
        let name = self.name.filter(|n| !n.trim().is_empty()).ok_or(DatabaseError::Validation {
            message: "Database name is required".into(),
            context: None,
        })?;
        let schema = self.schema.ok_or(DatabaseError::Validation {
            message: "Schema is required".into(),
            context: Some(name.clone().into()),
        })?;

        info!(db = %name, "In-memory database ready");

        Ok(Database { inner: Arc::new(DatabaseInner { name, state: RwLock::new(schema) }) })
    }
}
