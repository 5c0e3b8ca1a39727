use std::fmt::Debug;

pub mod config;
pub mod samples;
pub mod scroll;
pub mod session;
pub mod storage;
pub mod studio;
pub mod theme;

// keyed fetch result
//
// a page that loads data for some input (the project slug) can have a completion
// arrive after the input has already changed.  rather than trusting the order in which
// futures resolve, we remember which key a value was fetched for and only hand it out
// when that key is still the current one
#[derive(Clone, Debug, PartialEq)]
pub struct Keyed<K: Clone + Debug + PartialEq, V: Clone + Debug> {
    key: K,
    value: V,
}

impl<K: Clone + Debug + PartialEq, V: Clone + Debug> Keyed<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Keyed { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn for_key(&self, current: &K) -> Option<&V> {
        if &self.key == current {
            Some(&self.value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_key_yields_value() {
        let keyed = Keyed::new(String::from("atlas"), 7);

        assert_eq!(keyed.for_key(&String::from("atlas")), Some(&7));
        assert_eq!(keyed.key(), "atlas");
    }

    #[test]
    fn stale_key_is_discarded() {
        let keyed = Keyed::new(String::from("atlas"), 7);

        assert_eq!(keyed.for_key(&String::from("borealis")), None);
    }
}
