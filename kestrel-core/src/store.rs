use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use kestrel_state::{Album, AlbumEntities, AlbumId, QueryParams, SortOrder};

use crate::{
    AlbumCatalog, FetchFailed, NotificationSink, RequestId, RequestLifecycle, RequestStatus,
    memo::DisplayedAlbums,
};

/// What a call to [`AlbumSearchStore::load_albums`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The albums were replaced.
    Fulfilled { count: usize },
    /// The fetch failed; existing albums were kept.
    Failed(FetchFailed),
    /// A fetch was already in flight, so this request was dropped.
    Deduplicated,
    /// The request was abandoned before it settled; its result was discarded.
    Stale,
}

/// The state behind one album search view: the fetched albums, the search
/// query and sort order, and the status of the album fetch.
///
/// The displayed list, total count and spinner flags are derived from that
/// state. Each view owns its own store.
pub struct AlbumSearchStore<C, N> {
    catalog: Arc<C>,
    notifier: Arc<N>,
    state: RwLock<SearchState>,
    displayed: Mutex<DisplayedAlbums>,
}

/// Abandons its request if the `load_albums` future is dropped before the
/// catalog answers, so the store does not stay pending forever.
struct InFlight<'a> {
    state: &'a RwLock<SearchState>,
    request_id: RequestId,
}
impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let Ok(mut state) = self.state.write() else {
            return;
        };
        if state.lifecycle.abandon_request(self.request_id) {
            tracing::debug!(request_id = ?self.request_id, "album fetch dropped before completion");
        }
    }
}

#[derive(Debug, Default)]
struct SearchState {
    albums: AlbumEntities,
    // Bumped on every album replacement; keys the displayed-albums memo.
    albums_generation: u64,
    query: String,
    order: SortOrder,
    lifecycle: RequestLifecycle,
}

impl<C: AlbumCatalog, N: NotificationSink> AlbumSearchStore<C, N> {
    pub fn new(catalog: Arc<C>, notifier: Arc<N>, params: QueryParams) -> Self {
        Self {
            catalog,
            notifier,
            state: RwLock::new(SearchState {
                query: params.query,
                order: params.order,
                ..Default::default()
            }),
            displayed: Mutex::new(DisplayedAlbums::default()),
        }
    }

    /// Activation hook: kicks off the initial album fetch on the current tokio
    /// runtime. Call once, when the owning view is created.
    pub fn initialize(self: &Arc<Self>) -> tokio::task::JoinHandle<LoadOutcome> {
        tracing::debug!("initializing album search store");
        let store = self.clone();
        tokio::spawn(async move { store.load_albums().await })
    }

    /// Teardown hook: stop waiting for any fetch in flight. Its result will
    /// be discarded.
    pub fn reset(&self) {
        if let Some(request_id) = self.write_state().lifecycle.abandon() {
            tracing::debug!(?request_id, "abandoned album fetch");
        }
    }

    /// Fetch the album list from the catalog, unless a fetch is already in flight.
    pub async fn load_albums(&self) -> LoadOutcome {
        let started = self.write_state().lifecycle.start_fetch();
        let Some(request_id) = started else {
            tracing::debug!("album fetch already in flight, dropping request");
            return LoadOutcome::Deduplicated;
        };

        tracing::debug!(?request_id, "fetching albums");
        let in_flight = InFlight {
            state: &self.state,
            request_id,
        };
        let result = self.catalog.fetch_all().await;
        // Settled below, under the same write lock as the albums.
        std::mem::forget(in_flight);

        let failure = {
            let mut state = self.write_state();
            match result {
                Ok(albums) => {
                    if !state.lifecycle.succeed(request_id) {
                        tracing::debug!(?request_id, "discarding stale album list");
                        return LoadOutcome::Stale;
                    }
                    state.albums.set_all(albums);
                    state.albums_generation += 1;
                    let count = state.albums.len();
                    tracing::info!("loaded {count} albums");
                    return LoadOutcome::Fulfilled { count };
                }
                Err(error) => {
                    if !state.lifecycle.fail(request_id, error.message()) {
                        tracing::debug!(?request_id, "discarding stale fetch error: {error}");
                        return LoadOutcome::Stale;
                    }
                    error
                }
            }
        };

        // Only reached on a fresh transition into `failed`, so this fires once
        // per failure no matter how often the status is read afterwards.
        tracing::warn!("failed to load albums: {failure}");
        self.notifier.notify(failure.message());
        LoadOutcome::Failed(failure)
    }

    /// Replace the search query. Returns whether it changed.
    pub fn set_query(&self, query: impl Into<String>) -> bool {
        let query = query.into();
        let mut state = self.write_state();
        if state.query == query {
            return false;
        }
        state.query = query;
        true
    }

    /// Replace the sort order. Returns whether it changed.
    pub fn set_order(&self, order: SortOrder) -> bool {
        let mut state = self.write_state();
        if state.order == order {
            return false;
        }
        state.order = order;
        true
    }

    /// Replace query and order together, e.g. after the URL changed.
    /// Returns whether either changed.
    pub fn set_query_params(&self, params: QueryParams) -> bool {
        let mut state = self.write_state();
        let changed = state.query != params.query || state.order != params.order;
        state.query = params.query;
        state.order = params.order;
        changed
    }
}

/// Derived values.
impl<C, N> AlbumSearchStore<C, N> {
    /// The albums matching the query, sorted by title. Only rebuilt when the
    /// albums, query or order have changed since the last call.
    pub fn displayed_albums(&self) -> Arc<[Album]> {
        let state = self.read_state();
        self.displayed.lock().unwrap().get(
            &state.albums,
            state.albums_generation,
            &state.query,
            state.order,
        )
    }

    /// The size of the whole catalog, regardless of the current query.
    pub fn total_count(&self) -> usize {
        self.read_state().albums.len()
    }

    /// Whether to show a spinner in place of the list: a fetch is running
    /// and there is nothing to show yet.
    pub fn show_spinner(&self) -> bool {
        let state = self.read_state();
        state.lifecycle.is_pending() && state.albums.is_empty()
    }

    /// Whether to show a progress indicator: any fetch is running.
    pub fn show_progress(&self) -> bool {
        self.read_state().lifecycle.is_pending()
    }

    pub fn status(&self) -> RequestStatus {
        self.read_state().lifecycle.status().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.read_state().lifecycle.is_pending()
    }

    pub fn error(&self) -> Option<String> {
        self.read_state().lifecycle.error().map(str::to_string)
    }

    pub fn album(&self, id: &AlbumId) -> Option<Album> {
        self.read_state().albums.get(id).cloned()
    }

    pub fn query(&self) -> String {
        self.read_state().query.clone()
    }

    pub fn order(&self) -> SortOrder {
        self.read_state().order
    }

    /// The query and order, ready to be written back to the URL.
    pub fn query_params(&self) -> QueryParams {
        let state = self.read_state();
        QueryParams {
            query: state.query.clone(),
            order: state.order,
        }
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SearchState> {
        self.state.write().unwrap()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SearchState> {
        self.state.read().unwrap()
    }
}
