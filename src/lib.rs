pub mod app;
pub mod compute;
pub mod config;
pub mod console;
pub mod display;
pub mod entities;
pub mod game;
pub mod menu;
