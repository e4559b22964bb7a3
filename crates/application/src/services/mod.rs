pub mod bind_render;
pub mod update_locks;

pub use bind_render::{
    render_options, render_record, render_zone, render_zone_inclusions, synthesize_serial,
    RenderedRecord, RenderedZone,
};
pub use update_locks::UpdateLocks;
