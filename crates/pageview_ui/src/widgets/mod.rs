// Widget implementations

mod button;
mod indicator;
mod label;
mod page_host;
pub mod page_view;
mod solid;
mod switch;

pub use button::{BarButton, ButtonId};
pub use indicator::SelectionIndicator;
pub use label::Label;
pub use page_host::{PageHost, ScrollPhase};
pub use page_view::{
    BehaviorProvider, ButtonBarStyle, ContentProvider, PageView, PageViewConfig, PageViewError,
};
pub use solid::{solid, Solid};
pub use switch::Switch;
