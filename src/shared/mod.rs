pub mod requests;
pub mod types;
pub mod util;
