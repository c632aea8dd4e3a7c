use super::captures::Captures;
use super::error::RouterError;
use super::pattern::{trim_slashes, PathParts, Pattern};
use super::Router;

use std::collections::HashMap;

impl<T> Router<T> {
    pub fn new() -> Self {
        Self {
            static_map: HashMap::new(),
            dynamic: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.static_map.clear();
        self.dynamic.clear();
    }

    pub fn len(&self) -> usize {
        self.static_map.len() + self.dynamic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find<'s, 'p>(&'s self, path: &'p str) -> Option<(&'s T, Captures<'p>)>
    where
        's: 'p,
    {
        if let Some(data) = self.static_map.get(trim_slashes(path)) {
            return Some((data, Captures::new()));
        }

        let parts = PathParts::new(path);
        let mut captures = Captures::new();
        let data = self
            .dynamic
            .iter()
            .find(|(pattern, _)| pattern.match_parts(&parts, &mut captures.buf))
            .map(|(_, data)| data)?;
        Some((data, captures))
    }

    /// Panics if the pattern is invalid.
    pub fn insert(&mut self, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.try_insert(pattern, data) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, data: T) -> Result<&mut Self, RouterError> {
        let pattern = Pattern::parse(pattern)?;
        self.insert_pattern(pattern, data);
        Ok(self)
    }

    pub fn insert_pattern(&mut self, pattern: Pattern, data: T) -> &mut Self {
        if pattern.is_static() {
            let key: Box<str> = trim_slashes(pattern.as_str()).into();
            if self.static_map.insert(key, data).is_some() {
                tracing::debug!(pattern = pattern.as_str(), "static route overwritten");
            } else {
                tracing::debug!(pattern = pattern.as_str(), "static route registered");
            }
        } else {
            tracing::debug!(
                pattern = pattern.as_str(),
                priority = self.dynamic.len(),
                "dynamic route registered"
            );
            self.dynamic.push((pattern, data));
        }
        self
    }

    /// Dynamic patterns in dispatch order.
    pub fn dynamic_patterns(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.dynamic.iter().map(|(pattern, _)| pattern)
    }
}
