pub mod error;
pub mod link;
pub mod priority;
pub mod task;

pub use error::StudBudError;
pub use link::{Link, LinkGroup};
pub use priority::Priority;
pub use task::{Column, Task};
