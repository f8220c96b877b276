// ABOUTME: Library crate for the PDF chat TUI exposing its state machine, client and components for testing

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
