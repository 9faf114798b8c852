pub mod pointer;
pub mod scroll;

pub use pointer::wire_spark_input;
pub use scroll::{apply_light_shift, wire_scroll_lighting};
