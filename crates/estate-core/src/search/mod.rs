pub mod criteria;
pub mod engine;
pub mod sort;

pub use criteria::{BhkFilter, FilterCriteria};
pub use engine::{
    filter_and_sort, filter_properties, search_properties, SearchInput, SearchOutput,
    DEFAULT_PAGE_SIZE,
};
pub use sort::{sort_properties, SortKey};
