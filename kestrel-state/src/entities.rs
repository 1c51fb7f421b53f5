use std::collections::HashMap;

use crate::{Album, AlbumId};

/// Albums normalized into an ordered ID list plus an ID → album map.
///
/// Iteration follows the order albums were supplied in. If the same ID appears
/// more than once, it keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumEntities {
    ids: Vec<AlbumId>,
    entities: HashMap<AlbumId, Album>,
}
impl AlbumEntities {
    /// Normalize `albums`.
    pub fn from_albums(albums: impl IntoIterator<Item = Album>) -> Self {
        let mut entities = Self::default();
        entities.set_all(albums);
        entities
    }

    /// Replace every album.
    pub fn set_all(&mut self, albums: impl IntoIterator<Item = Album>) {
        self.ids.clear();
        self.entities.clear();
        for album in albums {
            if !self.entities.contains_key(&album.id) {
                self.ids.push(album.id.clone());
            }
            self.entities.insert(album.id.clone(), album);
        }
    }

    /// The album with the given ID, if present.
    pub fn get(&self, id: &AlbumId) -> Option<&Album> {
        self.entities.get(id)
    }

    /// Album IDs in order.
    pub fn ids(&self) -> &[AlbumId] {
        &self.ids
    }

    /// The number of distinct albums.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no albums.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Albums in order.
    pub fn iter(&self) -> impl Iterator<Item = &Album> {
        self.ids.iter().filter_map(|id| self.entities.get(id))
    }
}
impl<'a> IntoIterator for &'a AlbumEntities {
    type Item = &'a Album;
    type IntoIter = Box<dyn Iterator<Item = &'a Album> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_supplied_order() {
        let entities = AlbumEntities::from_albums([
            Album::new("b", "Second", "x"),
            Album::new("a", "First", "x"),
        ]);
        let titles: Vec<_> = entities.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Second", "First"]);
        assert_eq!(entities.len(), 2);
        assert_eq!(
            entities.get(&AlbumId::from("a")).map(|a| a.title.as_str()),
            Some("First")
        );
    }

    #[test]
    fn duplicate_ids_keep_first_position_last_value() {
        let entities = AlbumEntities::from_albums([
            Album::new("1", "Old", "x"),
            Album::new("2", "Other", "x"),
            Album::new("1", "New", "x"),
        ]);
        assert_eq!(entities.ids(), [AlbumId::from("1"), AlbumId::from("2")]);
        let titles: Vec<_> = entities.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["New", "Other"]);
    }

    #[test]
    fn set_all_replaces() {
        let mut entities = AlbumEntities::from_albums([Album::new("1", "One", "x")]);
        entities.set_all([Album::new("2", "Two", "x")]);
        assert_eq!(entities.len(), 1);
        assert!(entities.get(&AlbumId::from("1")).is_none());

        entities.set_all([]);
        assert!(entities.is_empty());
    }
}
