pub mod collection;
pub mod distribution;
pub mod genres;
pub mod history;
pub mod store;
pub mod summary;
pub mod update;
pub mod view;

pub use collection::Collection;
pub use distribution::{status_distribution, StatusSlice};
pub use genres::{top_genres, GenreCount};
pub use history::{watched_history, MonthBucket};
pub use store::CollectionStore;
pub use summary::{summarize, CollectionSummary, StatusCounts};
pub use update::{apply_edit, MovieEdit};
pub use view::{apply_view, SortDirection, ViewParams};
