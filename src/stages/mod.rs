pub mod folder;
pub mod statistics;
pub mod summary;

pub use folder::*;
pub use statistics::*;
pub use summary::*;
