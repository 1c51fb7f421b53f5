use std::cmp::Ordering;

use crate::{Album, SortOrder};

/// Keep every album whose title or artist contains `query`, ignoring case.
///
/// Relative order is preserved and an empty query keeps everything.
pub fn filter_albums<'a>(albums: impl IntoIterator<Item = &'a Album>, query: &str) -> Vec<Album> {
    let query = query.to_lowercase();
    albums
        .into_iter()
        .filter(|album| {
            query.is_empty()
                || album.title.to_lowercase().contains(&query)
                || album.artist.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Sort albums by title.
///
/// Titles are compared as-is: case matters and no locale rules apply, so
/// `"Zebra"` sorts before `"apple"`. Albums with equal titles keep their
/// input order in both directions.
pub fn sort_albums(albums: &[Album], order: SortOrder) -> Vec<Album> {
    let mut albums = albums.to_vec();
    sort_in_place(&mut albums, order);
    albums
}

/// Filter by `query`, then sort by `order`: the list a search view displays.
pub fn search_and_sort<'a>(
    albums: impl IntoIterator<Item = &'a Album>,
    query: &str,
    order: SortOrder,
) -> Vec<Album> {
    let mut albums = filter_albums(albums, query);
    sort_in_place(&mut albums, order);
    albums
}

fn sort_in_place(albums: &mut [Album], order: SortOrder) {
    // `sort_by` is stable; descending must flip the comparator rather than the
    // output so that ties stay in input order.
    albums.sort_by(|a, b| compare_titles(a, b, order));
}

fn compare_titles(a: &Album, b: &Album, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => a.title.cmp(&b.title),
        SortOrder::Descending => b.title.cmp(&a.title),
    }
}
