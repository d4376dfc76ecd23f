pub mod storage;
pub mod utils;

pub use utils::*;
