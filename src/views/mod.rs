pub mod admin;
pub mod catalog;
pub mod charts;
pub mod chat;
pub mod footer;
pub mod home;
pub mod map;
pub mod shared;
pub mod weather;

pub use admin::AdminView;
pub use home::HomeView;
