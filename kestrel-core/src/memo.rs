use std::sync::Arc;

use kestrel_state::{Album, AlbumEntities, SortOrder, search_and_sort};

/// The inputs the displayed list was last derived from.
#[derive(Debug, PartialEq, Eq)]
struct Inputs {
    albums_generation: u64,
    query: String,
    order: SortOrder,
}

/// Caches the filtered, sorted album list and only rebuilds it when the
/// albums, query or order it was built from change.
#[derive(Debug, Default)]
pub(crate) struct DisplayedAlbums {
    inputs: Option<Inputs>,
    albums: Arc<[Album]>,
    recomputations: u64,
}
impl DisplayedAlbums {
    /// `albums_generation` must change whenever `albums` does.
    pub fn get(
        &mut self,
        albums: &AlbumEntities,
        albums_generation: u64,
        query: &str,
        order: SortOrder,
    ) -> Arc<[Album]> {
        let fresh = self.inputs.as_ref().is_some_and(|inputs| {
            inputs.albums_generation == albums_generation
                && inputs.query == query
                && inputs.order == order
        });
        if !fresh {
            self.albums = search_and_sort(albums, query, order).into();
            self.inputs = Some(Inputs {
                albums_generation,
                query: query.to_string(),
                order,
            });
            self.recomputations += 1;
        }
        self.albums.clone()
    }

    #[cfg(test)]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
