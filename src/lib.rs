#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod dialogs;
pub mod document;
pub mod error;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod shape;
pub mod state;

pub use app::PaintApp;
pub use document::Document;
pub use error::ExportError;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::Renderer;
pub use shape::{Shape, StrokeSegment, TextMark};
pub use state::{PenState, TextPlacement};
