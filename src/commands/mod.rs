//! Server Bindings
//!
//! Frontend calls to the site's favorite endpoints.

mod favorite;

pub use favorite::*;
