pub mod landing;
pub mod widget;

pub use landing::LandingView;
pub use widget::WidgetView;
