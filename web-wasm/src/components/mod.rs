//! UIコンポーネント

pub mod gallery;
pub mod header;
pub mod item_card;
pub mod modal;
pub mod search_bar;
pub mod submit_form;
pub mod toast;
