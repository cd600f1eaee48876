//! Dioxus components and map bridge for the grid risk dashboard.
//!
//! This crate provides:
//! - `js_bridge`: `js_sys::eval()` wrappers around the map glue script
//! - `map_provider`: `MapProvider` implementation over the browser map library
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Upload panel, summary cards, tables and the risk map

pub mod components;
pub mod js_bridge;
pub mod map_provider;
pub mod state;
