//! WukirTech: the promotional site and admin panel for Desa Wisata Wukirsari.
//!
//! The domain logic (chat assistant, pseudo-map, data store client, admin
//! forms) compiles on every target; the Dioxus views are only built when a
//! platform feature (`web`, `desktop`, `mobile`) pulls in `dioxus`.

pub mod admin;
pub mod assistant;
pub mod charts;
pub mod clock;
pub mod config;
pub mod links;
pub mod map;
pub mod store;
pub mod theme;
pub mod types;
pub mod weather;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
