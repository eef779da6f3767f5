//! View composition: display tree, projection, and event dispatch.

mod event;
mod render;
mod replay;
mod tree;

pub use event::{Dispatcher, UiEvent};
pub use render::render;
pub use replay::replay_view;
pub use tree::{
    CellView, DRAWN_NOTICE, GAME_START, GameView, MoveEntry, SHOW_ASCENDING, SHOW_DESCENDING,
};
