pub mod app;
pub mod compass;
pub mod theme;
pub mod window;
