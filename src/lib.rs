// ABOUTME: Library crate for dashterm exposing the terminal client, menu, and socket session

pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod session;
pub mod terminal;
