use crate::error::DatabaseError;
use crate::repository::Repository;
use fxhash::FxHashMap;
use tracing::trace;

/// An insertion-ordered collection of records keyed by a unique name.
///
/// Records are never removed, so positions handed out by the index stay valid and
/// iteration always follows insertion order.
#[derive(Debug, Clone)]
pub struct Table<R> {
    name: &'static str,
    rows: Vec<R>,
    index: FxHashMap<String, usize>,
}

impl<R> Table<R> {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name, rows: Vec::new(), index: FxHashMap::default() }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&R> {
        self.index.get(key).map(|&slot| &self.rows[slot])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut R> {
        self.index.get(key).map(|&slot| &mut self.rows[slot])
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: 'static> Repository<R> for Table<R> {
    fn find_by_name(&self, name: &str) -> Option<&R> {
        self.get(name)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut R> {
        self.get_mut(name)
    }

    fn insert(&mut self, name: &str, record: R) -> Result<&R, DatabaseError> {
        if self.index.contains_key(name) {
            return Err(DatabaseError::Conflict {
                message: name.to_owned().into(),
                context: Some(self.name.into()),
            });
        }

        let slot = self.rows.len();
        trace!(table = self.name, key = name, slot, "Inserting record");
        self.rows.push(record);
        self.index.insert(name.to_owned(), slot);
        Ok(&self.rows[slot])
    }

    fn list(&self) -> impl Iterator<Item = &R> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates_without_side_effects() {
        let mut table = Table::new("animals");
        table.insert("monkey", 1).unwrap();

        let err = table.insert("monkey", 2).unwrap_err();
        assert!(matches!(err, DatabaseError::Conflict { .. }));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("monkey"), Some(&1));
    }

    #[test]
    fn test_list_follows_insertion_order() {
        let mut table = Table::new("animals");
        table.insert("monkey", 'm').unwrap();
        table.insert("eagle", 'e').unwrap();
        table.insert("monkey", 'M').unwrap_err();

        assert_eq!(table.list().copied().collect::<String>(), "me");
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut table = Table::new("habitats");
        table.insert("Jungle", String::from("empty")).unwrap();

        if let Some(row) = table.get_mut("Jungle") {
            row.push_str(" -> monkey");
        }

        assert_eq!(table.get("Jungle").map(String::as_str), Some("empty -> monkey"));
        assert!(table.get_mut("Desert").is_none());
    }
}
