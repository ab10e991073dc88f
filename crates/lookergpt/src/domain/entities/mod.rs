//! Domain Entities
//!
//! - Query: the user's natural-language question
//! - Reply: the text handed back to the browser

mod query;
mod reply;

pub use query::Query;
pub use reply::Reply;
