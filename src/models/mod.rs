pub mod exchange;
pub mod gas;
pub mod report;

pub use exchange::*;
pub use gas::*;
pub use report::*;
