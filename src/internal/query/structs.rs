pub mod query;
pub mod query_options;
pub mod query_result;

pub use query::Query;
pub use query_options::QueryOptions;
pub use query_result::QueryResult;
