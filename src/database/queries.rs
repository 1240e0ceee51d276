mod dog_queries;
mod user_queries;
mod walk_queries;
mod walker_summary;

pub use dog_queries::*;
pub use user_queries::*;
pub use walk_queries::*;
pub use walker_summary::*;
