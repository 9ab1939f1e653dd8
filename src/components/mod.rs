pub mod app;
pub mod drag_board;
pub mod item_strip;
pub mod scale_picker;

pub use app::App;
