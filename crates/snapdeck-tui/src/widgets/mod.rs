mod dots;
mod menu;
mod nav_bar;
mod progress_bar;
mod section_view;
mod status_bar;

pub use dots::DotsWidget;
pub use menu::MenuWidget;
pub use nav_bar::NavBarWidget;
pub use progress_bar::ProgressBarWidget;
pub use section_view::SectionViewWidget;
pub use status_bar::StatusBarWidget;
