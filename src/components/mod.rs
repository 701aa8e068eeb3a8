pub mod drop_zone;
pub mod sidebar;
pub mod video_list;

pub use drop_zone::DropZone;
pub use video_list::VideoList;
