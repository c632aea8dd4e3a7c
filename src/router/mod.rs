mod captures;
mod error;
mod imp;
mod pattern;

pub use self::captures::Captures;
pub use self::error::RouterError;
pub use self::pattern::{Pattern, Segment};

use std::collections::HashMap;

/// The route table of a single method.
///
/// Static patterns are looked up by exact path first. Dynamic patterns are
/// then tried in registration order and the first match wins, so a more
/// specific pattern has to be inserted before a more general one
/// (`/u/:id:long` before `/u/:name`).
#[derive(Debug)]
pub struct Router<T> {
    static_map: HashMap<Box<str>, T>,
    dynamic: Vec<(Pattern, T)>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
