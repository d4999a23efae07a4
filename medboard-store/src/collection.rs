use crate::error::{StoreError, StoreResult};
use medboard_model::{FieldMap, Record};
use medboard_types::{RecordId, SectionKind};

/// Ordered in-memory collection of records for one section.
///
/// The store owns its records exclusively once inserted; editing flows work
/// on clones and write back through [`CollectionStore::update_by_id`].
/// Identifiers are unique within the collection and immutable once
/// assigned.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    kind: SectionKind,
    records: Vec<Record>,
}

impl CollectionStore {
    /// Creates an empty collection for the given section.
    #[must_use]
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    /// The section this collection belongs to.
    #[must_use]
    pub const fn kind(&self) -> SectionKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| &record.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Appends a record. Fails if the identifier is already present.
    pub fn insert(&mut self, record: Record) -> StoreResult<()> {
        debug_assert_eq!(record.kind, self.kind);
        if self.contains(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    /// Replaces the field map of the record with the given identifier.
    ///
    /// The stored identifier always survives: a stray `id` entry in the
    /// payload never displaces it.
    pub fn update_by_id(&mut self, id: &RecordId, mut fields: FieldMap) -> StoreResult<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        fields.remove("id");
        record.fields = fields;
        Ok(())
    }

    /// Removes and returns the record with the given identifier. Other
    /// collections are never affected; there is no cascading.
    pub fn delete_by_id(&mut self, id: &RecordId) -> StoreResult<Record> {
        let index = self
            .records
            .iter()
            .position(|record| &record.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        Ok(self.records.remove(index))
    }

    /// Lazy, order-preserving subsequence of records matching the predicate.
    /// The collection itself is not touched.
    pub fn filter<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a Record>
    where
        P: FnMut(&Record) -> bool + 'a,
    {
        self.records.iter().filter(move |record| predicate(record))
    }
}

/// One independent store per section.
#[derive(Debug, Clone)]
pub struct Collections {
    stores: [CollectionStore; 6],
}

impl Collections {
    /// Creates the full set of empty collections.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stores: SectionKind::ALL.map(CollectionStore::new),
        }
    }

    /// The collection for a section.
    #[must_use]
    pub fn store(&self, kind: SectionKind) -> &CollectionStore {
        &self.stores[kind as usize]
    }

    /// Mutable access to the collection for a section.
    pub fn store_mut(&mut self, kind: SectionKind) -> &mut CollectionStore {
        &mut self.stores[kind as usize]
    }
}

impl Default for Collections {
    fn default() -> Self {
        Self::new()
    }
}
