pub mod animation;
pub mod buffer;
pub mod config;
pub mod event;
pub mod indicator;
pub mod layout;
pub mod measure;
pub mod position;
pub mod render;
pub mod terminal;
pub mod transitions;
pub mod types;
pub mod view;
pub mod visibility;

pub use animation::AnimatedValue;
pub use buffer::{Buffer, Cell};
pub use config::{ConfigError, IndicatorConfig};
pub use event::{ContentOffset, Dimensions, IndicatorEvent, ScrollEvent};
pub use indicator::{ScrollHandler, ScrollViewIndicator};
pub use layout::{layout, IndicatorLayout, Rect};
pub use measure::Measurements;
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
pub use view::{IndicatorView, Overlay, ScrollViewNode, Thumb};
pub use visibility::{Visibility, VisibilityController};
