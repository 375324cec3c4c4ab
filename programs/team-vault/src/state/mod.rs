pub mod manager;
pub mod vault;

pub use manager::*;
pub use vault::*;
