pub use kestrel_state;
pub use kestrel_state::{Album, AlbumId, QueryParams, SortOrder};

use kestrel_subsonic as bs;

mod catalog;
pub use catalog::{AlbumCatalog, FetchFailed, SubsonicCatalog};

mod notify;
pub use notify::{NotificationSink, Toast, ToastSink};

mod request_status;
pub use request_status::{RequestId, RequestLifecycle, RequestStatus};

mod memo;

mod store;
pub use store::{AlbumSearchStore, LoadOutcome};
