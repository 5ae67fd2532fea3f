// HTTP routes
pub mod flights;
pub mod health;

pub use flights::*;
pub use health::*;
