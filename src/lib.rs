pub mod errors;
pub mod extract;
pub mod histogram;
pub mod takeout;
