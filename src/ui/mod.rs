//! UI layer.
//!
//! The window controller and its elements only speak in window pixels and paint commands; the
//! concrete toolkit (terminal, headless raster) lives behind `backend::Backend`.

pub mod backend;
pub mod canvas;
pub mod core;
pub mod element;
pub mod image;
pub mod registry;
pub mod timer;
pub mod window;
