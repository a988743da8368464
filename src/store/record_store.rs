
use serde::Serialize;

use super::record_id::IdScheme;

pub trait Record {
    const SCHEME: IdScheme;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// Partial update of a record: only the fields that are set get written.
pub trait RecordPatch<R> {
    fn apply(self, record: &mut R);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordStore<T> {
    records: Vec<T>,
    // Largest number ever issued or seeded. Keeps ids unique after removals.
    #[serde(skip)]
    high_water: Option<u32>,
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: vec![],
            high_water: None,
        }
    }

    pub fn seeded(records: Vec<T>) -> Self {
        let high_water = records.iter().filter_map(|r| T::SCHEME.number(r.id())).max();
        Self { records, high_water }
    }

    pub fn next_id(&self) -> String {
        let current = self.records.iter().filter_map(|r| T::SCHEME.number(r.id())).max();
        let number = current
            .into_iter()
            .chain(self.high_water)
            .max()
            .map(|n| n + 1)
            .unwrap_or(T::SCHEME.base);
        T::SCHEME.format(number)
    }

    /// Appends `record` under a fresh id and returns that id.
    pub fn add(&mut self, mut record: T) -> String {
        let id = self.next_id();
        self.high_water = T::SCHEME.number(&id).max(self.high_water);
        record.set_id(id.clone());
        self.records.push(record);
        id
    }

    /// Returns false, without touching anything, if `id` is absent.
    pub fn update<P: RecordPatch<T>>(&mut self, id: &str, patch: P) -> bool {
        match self.find_mut(id) {
            Some(record) => {
                patch.apply(record);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let position = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(position))
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id()).collect()
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdScheme, Record, RecordPatch, RecordStore};

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        title: String,
        body: String,
    }

    impl Note {
        fn new(id: &str, title: &str) -> Self {
            Self { id: id.to_string(), title: title.to_string(), body: String::new() }
        }
    }

    impl Record for Note {
        const SCHEME: IdScheme = IdScheme::new("N", 2, 1);
        fn id(&self) -> &str { &self.id }
        fn set_id(&mut self, id: String) { self.id = id }
    }

    struct TitleOnly(&'static str);

    impl RecordPatch<Note> for TitleOnly {
        fn apply(self, record: &mut Note) {
            record.title = self.0.to_string();
        }
    }

    fn seeded() -> RecordStore<Note> {
        RecordStore::seeded(vec![Note::new("N01", "first"), Note::new("N07", "seventh"), Note::new("N03", "third")])
    }

    #[test]
    fn add_goes_past_the_max() {
        let mut notes = seeded();
        let id = notes.add(Note::new("", "new"));
        assert_eq!(id, "N08");
        assert_eq!(notes.find("N08").unwrap().title, "new");
        assert_eq!(notes.len(), 4);
    }

    #[test]
    fn remove_then_find_is_none() {
        let mut notes = seeded();
        let removed = notes.remove("N03").unwrap();
        assert_eq!(removed.title, "third");
        assert!(notes.find("N03").is_none());
        assert!(notes.remove("N03").is_none());
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn update_touches_only_named_fields() {
        let mut notes = seeded();
        notes.find_mut("N01").unwrap().body = "kept".to_string();
        assert!(notes.update("N01", TitleOnly("renamed")));
        let note = notes.find("N01").unwrap();
        assert_eq!(note.title, "renamed");
        assert_eq!(note.body, "kept");
        assert!(!notes.update("N99", TitleOnly("ghost")));
        assert_eq!(notes.len(), 3);
    }

    #[test]
    fn emptied_store_does_not_reuse_ids() {
        let mut notes = seeded();
        for id in ["N01", "N03", "N07"] {
            notes.remove(id);
        }
        assert!(notes.is_empty());
        assert_eq!(notes.add(Note::new("", "again")), "N08");

        let removed = notes.add(Note::new("", "gone"));
        notes.remove(&removed);
        assert_eq!(notes.add(Note::new("", "next")), "N10");
    }

    #[test]
    fn fresh_store_starts_at_base() {
        let mut notes: RecordStore<Note> = RecordStore::new();
        assert_eq!(notes.next_id(), "N01");
        notes.add(Note::new("", "a"));
        assert_eq!(notes.ids(), vec!["N01"]);
    }
}
