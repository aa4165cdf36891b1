mod app_version;
mod flags;
mod stylesheet;

pub use app_version::*;
pub use flags::*;
pub use stylesheet::*;
