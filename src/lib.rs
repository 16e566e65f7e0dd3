pub mod action;
pub mod app;
pub mod bubbles;
pub mod config;
pub mod event;
pub mod format;
pub mod system;
pub mod ui;
