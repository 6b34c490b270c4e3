#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, parse_hex_color, render_zone_crowds_to_png, RenderConfig};
