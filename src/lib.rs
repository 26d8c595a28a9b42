pub mod api;
pub mod controller;
pub mod dataset;
pub mod lookup;
pub mod models;
pub mod page;

pub use api::LookupService;
pub use controller::{SearchController, ViewState};
pub use dataset::{Dataset, LoadReport};
pub use lookup::{find, find_exact, normalize, MatchMode};
pub use models::Record;
