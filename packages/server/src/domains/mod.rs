// Business domains
pub mod flights;
