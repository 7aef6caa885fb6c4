//! Request boundary: order in, quoted cost out.

mod dispatch;

pub use dispatch::{DispatchService, Quote};
