pub mod app;
pub mod events;
pub mod layout;
pub mod router;
pub mod theme;
pub mod views;
