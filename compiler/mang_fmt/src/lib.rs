//! Text forms of mang_lang expressions and values.
//!
//! [`serialize`] produces the canonical compact source form: `reformat`
//! output, value-pass output, and the keys of evaluated tables.
//! [`serialize_types`] produces the type-pass form, where scalars print as
//! their kind name and containers print a sample of their first element.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction
//! - [`number`]: `%.15g` number formatting

pub mod emitter;
pub mod number;
mod printer;

pub use emitter::{Emitter, StringEmitter};
pub use number::format_number;
pub use printer::{Printer, Style};

use mang_ir::{Arena, Handle};

/// Canonical source form of `handle`.
pub fn serialize(arena: &Arena, handle: Handle) -> String {
    render(arena, handle, Style::Value)
}

/// Type form of `handle`.
pub fn serialize_types(arena: &Arena, handle: Handle) -> String {
    render(arena, handle, Style::Types)
}

fn render(arena: &Arena, handle: Handle, style: Style) -> String {
    let mut printer = Printer::new(arena, StringEmitter::new());
    printer.print(handle, style);
    printer.finish().output()
}
