pub mod card;
pub mod config;
pub mod controller;
pub mod geom;
pub mod input;
pub mod layout;
pub mod placement;
pub mod scene;
pub mod state;
pub mod table;
pub mod tween;

pub use card::{Artwork, CardId, Slot, SlotId, Tint};
pub use config::SceneConfig;
pub use controller::{CardController, DragStart, DropOutcome, HoverOutcome, Layout, Response};
pub use geom::{Bounds, Vec2};
pub use input::{PointerDispatcher, PointerEvent};
pub use scene::{Scene, Sprite, Stage};
pub use state::{Dragging, Hovering};
pub use table::Table;
pub use tween::{TweenSpec, TweenTo, Tweens};
