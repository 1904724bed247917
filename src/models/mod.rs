pub mod joya;
pub mod query;

pub use joya::*;
pub use query::*;
