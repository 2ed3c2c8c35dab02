pub mod attribution_tracker;
pub mod call_button;
pub mod error;
pub mod loading;

pub use attribution_tracker::AttributionTracker;
pub use call_button::CallButton;
pub use error::{ErrorView, InvalidAreaView};
pub use loading::LoadingView;
