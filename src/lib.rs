pub mod filters;
pub mod network;

pub use filters::{Filter, FilterArgs, FilterError, ending, reverse_pointer, reverse_pointer_zone};
