pub mod clipboard;
pub mod payload_source;
pub mod renderer;

pub use clipboard::{ClipboardError, ClipboardWriter};
pub use payload_source::{PayloadSource, PayloadSourceError};
pub use renderer::{RenderOutput, Renderer};
