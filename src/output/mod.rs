//! Frame output: byte packing, firmware tables, previews and PNG export

mod pack;
mod table;
mod ascii;
mod png;

pub use pack::*;
pub use table::*;
pub use ascii::*;
pub use png::*;
