pub mod board_service;
pub mod reading_service;
pub mod reorder;
pub mod seed;

pub use board_service::BoardService;
pub use reading_service::ReadingService;
pub use reorder::{reorder, TaskMove};
