pub mod lookup;
pub mod reverse;

pub use lookup::lookup;
pub use reverse::reverse_lookup;

use serde::Deserialize;

/// Optional JSONP callback, shared by both routes.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub callback: Option<String>,
}
