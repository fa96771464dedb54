#![allow(clippy::multiple_crate_versions)]

pub mod filtering;
pub mod model;
pub mod pagination;
pub mod pipeline;
pub mod sort;
pub mod view;

pub use filtering::{ContinentFilter, Filters, HasStatesFilter};
pub use model::{Continent, Country};
pub use pagination::{Page, PageSize};
pub use sort::{SortKey, SortOrder, SortSpec};
pub use view::{ViewEvent, ViewState};
