//! Renderer-agnostic tweening and frame-compilation engine for animating
//! points and polylines on the complex plane.
//!
//! Authored keyframes ([`Frame`]) interpolate pairwise ("tween") either
//! directly or by spiral (polar) motion, get batched by path style, and
//! compile into screen-space draw output: immediate [`DrawList`]s or
//! precomputed [`FastFrame`] vertex tables for fixed-rate replay. The host
//! event loop drives playback by threading a caller-owned [`PlaybackState`]
//! through [`Animation`]'s tick functions; windowing, pixel encoding, and
//! the actual draw calls belong to the embedding backend.

pub mod animation;
pub mod builders;
pub mod color;
pub mod complex;
pub mod config;
pub mod error;
pub mod fastframe;
pub mod frame;
pub mod interp;
pub mod path;
pub mod point;
pub mod render;

// Re-exports for consumers (adapters)
pub use animation::{Animation, ExportFrame, Phase, PlaybackState, TickDraw};
pub use color::Color;
pub use complex::Complex;
pub use config::{TweenTolerances, View, WindowSize};
pub use error::EngineError;
pub use fastframe::{FastFrame, VertexBatch};
pub use frame::Frame;
pub use interp::{Transition, TweenMethod};
pub use path::{Path, PathInterp};
pub use point::{Marker, Point};
pub use render::{compile_frame, DrawList, DrawOp};
