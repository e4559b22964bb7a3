//! Rendering of the structured DNS model into BIND configuration text.
//!
//! Everything here is pure: no I/O, no logging. Records that cannot be
//! rendered are reported back as diagnostics for the caller to surface.

mod options;
mod record;
mod zone;

pub use options::{render_options, render_zone_inclusions};
pub use record::{render_record, RenderedRecord};
pub use zone::{render_zone, synthesize_serial, RenderedZone};

/// Make a domain name absolute by appending a trailing dot.
///
/// `@` (the zone origin) and names that are already absolute are returned as is.
pub(crate) fn absolute_name(name: &str) -> String {
    let name = name.trim();
    if name == "@" || name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

pub(crate) fn ensure_trailing_dot(name: &str) -> String {
    let name = name.trim();
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
