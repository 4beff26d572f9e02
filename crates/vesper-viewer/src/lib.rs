//! Vesper Viewer - windowed host for the backdrop engine

mod app;

pub use app::ViewerApp;
