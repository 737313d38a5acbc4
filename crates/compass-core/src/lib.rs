//! Engine behind a radial "compass" navigation widget: arc geometry, a spring
//! animated needle, and pointer gestures that turn into navigation events.

pub mod error;
pub mod geometry;
pub mod gesture;
pub mod item;
pub mod macros;
pub mod navigator;
pub mod spring;

pub use error::NavigatorError;
pub use geometry::{ArcLayout, Orientation, Point, ViewBox, Viewport};
pub use gesture::{GestureController, GestureEnd, GestureState};
pub use item::{ItemId, ItemList, NavigableItem};
pub use navigator::{Frame, ItemMark, Navigation, Navigator, Needle, Trigger};
pub use spring::{SpringParams, SpringState, Ticker};
