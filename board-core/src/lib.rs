pub mod ranking;
pub mod session_store;

pub use ranking::*;
pub use session_store::*;
