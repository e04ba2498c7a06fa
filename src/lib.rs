pub mod domain;
pub mod utils;
pub mod widget;
