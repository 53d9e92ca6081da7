pub mod accordion;
pub mod carousel;
pub mod contact_form;
pub mod event_banner;
pub mod lightbox;
pub mod main_top_nav;
pub mod prayer_widget;
pub mod video_panel;
