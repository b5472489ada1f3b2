pub mod schema;
pub mod extract;

pub use schema::*;
pub use extract::*;
