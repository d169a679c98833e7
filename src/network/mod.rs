pub mod reverse_name;
pub mod types;
pub mod util;
