use crate::router::Captures;

use std::str::FromStr;

/// Owned path captures of the request being handled.
///
/// Filled by [`HttpRouter::dispatch`](crate::HttpRouter::dispatch) and read by
/// [`bind`](crate::bind::bind). A fresh value is published for every dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(Box<str>, Box<str>)>,
}

impl Params {
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find_map(|(n, v)| if &**n == name { Some(&**v) } else { None })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(n, v)| (&**n, &**v))
    }
}

impl From<&Captures<'_>> for Params {
    fn from(caps: &Captures<'_>) -> Self {
        caps.iter().map(|&(n, v)| (n, v)).collect()
    }
}

impl<K, V> std::iter::FromIterator<(K, V)> for Params
where
    K: Into<Box<str>>,
    V: Into<Box<str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let pairs = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { pairs }
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter {
        IntoIter {
            inner: self.pairs.into_iter(),
        }
    }
}

pub struct IntoIter {
    inner: std::vec::IntoIter<(Box<str>, Box<str>)>,
}

impl Iterator for IntoIter {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, v)| (n.into(), v.into()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(n, v)| (n.into(), v.into()))
    }
}

impl ExactSizeIterator for IntoIter {}
