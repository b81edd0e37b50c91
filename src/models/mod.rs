// ABOUTME: Core data models for the dashboard sidebar

pub mod menu;

pub use menu::{default_sections, MenuRow, MenuSection, MenuState};
