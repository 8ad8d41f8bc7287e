pub mod footer;
pub mod header;
pub mod layout;
pub mod modal;
pub mod popup;
pub mod progress_bar;
