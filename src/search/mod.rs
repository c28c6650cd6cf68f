pub mod client;
pub mod criteria;
pub mod location;
pub mod models;
pub mod query;
pub mod report;
pub mod tool;

pub use criteria::SearchCriteria;
pub use tool::PropertySearchTool;
