//! The album model behind kestrel's search view, the pure search/sort
//! derivation over it, and the URL query parameters that describe a view.
//!
//! Kept free of any runtime so it can be reused by other front-ends.
#![deny(missing_docs)]

pub use kestrel_subsonic as bs;

mod album;
pub use album::{Album, AlbumId, CoverArtId};

mod entities;
pub use entities::AlbumEntities;

mod sort_order;
pub use sort_order::SortOrder;

mod search;
pub use search::{filter_albums, search_and_sort, sort_albums};

mod query_params;
pub use query_params::QueryParams;
