//! Tiered-digit clock face for a 144x168 memory LCD.
//!
//! Each minute the time is classified into Priority, Lesser and Least
//! glyphs ([`classify`]), laid out as a centered `H:MM` block
//! ([`layout`]) and composited onto a [`DrawTarget`] ([`render`]).
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

#![cfg_attr(not(test), no_std)]

mod log;

pub mod assets;
pub mod button;
pub mod classify;
pub mod clock;
pub mod config;
pub mod display;
pub mod framebuffer;
pub mod layout;
pub mod render;
pub mod resources;
pub mod sheet;
pub mod tier;

pub use classify::{classify, Classification, DigitSlot, SlotPosition};
pub use clock::{ClockState, TimeError, TimeOfDay};
pub use config::{FaceConfig, HourFormat, Palette};
pub use layout::{layout, CommandKind, DrawCommand, Frame};
pub use render::{redraw, render, RenderReport};
pub use resources::Resources;
pub use sheet::{RenderError, SheetKind, SpriteSheet};
pub use tier::GlyphTier;
