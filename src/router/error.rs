#[derive(Debug, thiserror::Error)]
#[error("{msg}: pattern = {pattern:?}")]
pub struct RouterError {
    msg: &'static str,
    pattern: Box<str>,
}

impl RouterError {
    pub(crate) fn new(msg: &'static str, pattern: &str) -> Self {
        Self {
            msg,
            pattern: pattern.into(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.msg
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
