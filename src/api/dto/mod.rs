pub mod board;
pub mod reading;

pub use board::{
    BoardResponse, ColumnView, CreateColumnRequest, CreateTaskRequest, MoveTaskRequest,
    UpdateColumnRequest, UpdateTaskRequest,
};
pub use reading::{
    CreateGroupRequest, CreateLinkRequest, GroupView, MoveLinkRequest, ReadingListResponse,
    UpdateLinkRequest,
};
