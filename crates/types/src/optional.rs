use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that may or may not be present.
///
/// On the binary wire an `Optional` carries a leading tag byte (see
/// `beefy-codec`). In JSON it carries no tag at all: `None` is `null` and
/// `Some(v)` is exactly the JSON of `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    None,
    Some(T),
}

impl<T> Optional<T> {
    /// Wraps a present value.
    pub fn some(value: T) -> Self {
        Optional::Some(value)
    }

    /// An absent value.
    pub fn none() -> Self {
        Optional::None
    }

    pub fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Replaces the contents with `value`.
    pub fn set_some(&mut self, value: T) {
        *self = Optional::Some(value);
    }

    /// Clears the contents.
    pub fn set_none(&mut self) {
        *self = Optional::None;
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Optional::Some(v) => Some(v),
            Optional::None => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: Clone + Default> Optional<T> {
    /// Returns `(value, true)` when present and `(T::default(), false)` when
    /// absent. Never panics; callers must check the flag.
    pub fn unwrap(&self) -> (T, bool) {
        match self {
            Optional::Some(v) => (v.clone(), true),
            Optional::None => (T::default(), false),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Some(v),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(v) => Some(v),
            Optional::None => None,
        }
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Some(v) => v.serialize(serializer),
            Optional::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}
