//! Display Canvas
//!
//! Headless RGB888 framebuffer for the 240×240 dashboard display, plus frame
//! serialization (PNG / JPEG) for the device upload path.
//!
//! The canvas implements [`embedded_graphics::draw_target::DrawTarget`], so any
//! embedded-graphics drawable (and every component in `display-components`)
//! renders into it directly.

pub mod encode;
pub mod framebuffer;

pub use encode::{encode_jpeg, encode_png, save_png, to_image, EncodeError, DEFAULT_JPEG_QUALITY};
pub use framebuffer::{Canvas, DEFAULT_HEIGHT, DEFAULT_WIDTH};
