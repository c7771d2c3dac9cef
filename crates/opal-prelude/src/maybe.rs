//! Maybe type and operations
//!
//! The `Maybe` type represents optional values. A value of type `Maybe<T>`
//! either contains a value of type `T` (represented as `Present(v)`), or it
//! is empty (represented as `Absent`).
//!
//! The container is immutable: every combinator consumes or borrows the
//! receiver and produces a new container, so shared read access from any
//! number of threads is safe without synchronization.
//!
//! # Type Class Instances
//!
//! - `Eq`: equality by held value; `Absent` equals only `Absent`
//! - `Ord`: `Absent < Present`, then by contained value
//! - `Show`: `Display`/`Debug` representations
//! - `Functor`: `fmap` via [`Maybe::map`]
//! - `Monad`: `>>=` via [`Maybe::flat_map`]
//!
//! # Nullable interop
//!
//! The null-equivalent at this crate's boundary is [`Option::None`]. The
//! `From<Option<T>>` conversion is the null-inspecting factory, and the
//! inverse conversion is the `get_or_null` escape hatch. Operations whose
//! names mention `nullable` accept mappers that may produce `None` and
//! define how that null-equivalent is absorbed.

use crate::error::MaybeError;
use std::fmt;

/// The Maybe type
///
/// Represents an optional value: either `Present(v)` or `Absent`.
pub enum Maybe<T> {
    /// Holds nothing. Carries no payload, so no singleton-sharing trick
    /// is needed; construct it with [`Maybe::empty`].
    Absent,
    /// Holds exactly one value.
    Present(T),
}

impl<T> Maybe<T> {
    /// The canonical `Absent` container.
    #[inline]
    pub const fn empty() -> Maybe<T> {
        Maybe::Absent
    }

    /// Returns `true` if the container holds a value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if the container holds nothing.
    ///
    /// Exactly one of `is_present` / `is_absent` holds at any time.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Alias for [`Maybe::is_present`].
    #[inline]
    pub const fn is_defined(&self) -> bool {
        self.is_present()
    }

    /// Alias for [`Maybe::is_present`].
    #[inline]
    pub const fn non_empty(&self) -> bool {
        self.is_present()
    }

    /// Alias for [`Maybe::is_absent`].
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_absent()
    }

    /// Maps a `Maybe<T>` to `Maybe<R>` by applying a function to a held
    /// value. `Absent` is returned unchanged without invoking `f`.
    #[inline]
    pub fn map<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(v) => Maybe::Present(f(v)),
        }
    }

    /// Maps with a mapper that may produce the null-equivalent; a `None`
    /// result is re-wrapped through the factory and collapses to `Absent`.
    ///
    /// `Absent` is returned unchanged without invoking `f`.
    #[inline]
    pub fn map_nullable<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Option<R>,
    {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(v) => Maybe::from(f(v)),
        }
    }

    /// Monadic bind (>>=): applies a function that itself returns a
    /// container, and returns that result directly without re-wrapping.
    ///
    /// `Absent` is returned unchanged without invoking `f`. The signature
    /// guarantees the mapper produces a container, so the strict non-null
    /// contract of the bind holds by construction.
    #[inline]
    pub fn flat_map<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(v) => f(v),
        }
    }

    /// Strict bind over a nullable-interop mapper.
    ///
    /// The mapper is contractually required to produce a container; a
    /// `None` result is a programming error in the caller and is reported
    /// at the call site as [`MaybeError::NullResult`]. An `Absent`
    /// receiver yields `Ok(Absent)` without invoking `f`.
    #[inline]
    pub fn try_flat_map<R, F>(self, f: F) -> Result<Maybe<R>, MaybeError>
    where
        F: FnOnce(T) -> Option<Maybe<R>>,
    {
        match self {
            Maybe::Absent => Ok(Maybe::Absent),
            Maybe::Present(v) => f(v).ok_or(MaybeError::NullResult),
        }
    }

    /// Lenient bind over a nullable-interop mapper.
    ///
    /// This is the single non-standard monadic operation of the container:
    /// a `None` mapper result is coerced to `Absent` instead of being
    /// reported as an error. It exists to absorb interop from code that
    /// does not uphold the strict bind contract of
    /// [`Maybe::try_flat_map`]; do not reach for it first.
    #[inline]
    pub fn flat_map_safely<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Option<Maybe<R>>,
    {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(v) => f(v).unwrap_or(Maybe::Absent),
        }
    }

    /// Returns the container unchanged if it holds a value satisfying the
    /// predicate, else `Absent`.
    ///
    /// The predicate is not evaluated on an `Absent` receiver.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(v) => {
                if predicate(&v) {
                    Maybe::Present(v)
                } else {
                    Maybe::Absent
                }
            }
        }
    }

    /// Complement of [`Maybe::filter`]: keeps the value only when the
    /// predicate does not hold.
    #[inline]
    pub fn filter_not<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(v) => {
                if predicate(&v) {
                    Maybe::Absent
                } else {
                    Maybe::Present(v)
                }
            }
        }
    }

    /// Returns `true` iff the container holds a value equal to `other`.
    #[inline]
    pub fn contains(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Maybe::Absent => false,
            Maybe::Present(v) => v == other,
        }
    }

    /// Returns `true` iff the container holds a value satisfying the
    /// predicate.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Absent => false,
            Maybe::Present(v) => predicate(v),
        }
    }

    /// Returns `true` if the container is `Absent` (vacuously) or holds a
    /// value satisfying the predicate.
    #[inline]
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Absent => true,
            Maybe::Present(v) => predicate(v),
        }
    }

    /// Invokes `f` with the held value iff `Present`; no-op on `Absent`.
    #[inline]
    pub fn for_each<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        if let Maybe::Present(v) = self {
            f(v);
        }
    }

    /// Checked value access.
    ///
    /// Returns a reference to the held value, or
    /// [`MaybeError::EmptyValueAccess`] on an `Absent` container.
    #[inline]
    pub fn get(&self) -> Result<&T, MaybeError> {
        match self {
            Maybe::Absent => Err(MaybeError::EmptyValueAccess),
            Maybe::Present(v) => Ok(v),
        }
    }

    /// Returns the contained `Present` value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Absent` with a custom panic message.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => panic!("called `Maybe::unwrap()` on an `Absent` value"),
        }
    }

    /// Returns the held value or a provided default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Absent => default,
            Maybe::Present(v) => v,
        }
    }

    /// Returns the held value or computes it from a closure.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Absent => f(),
            Maybe::Present(v) => v,
        }
    }

    /// Transforms the container into a `Result`, mapping `Present(v)` to
    /// `Ok(v)` and `Absent` to `Err(err)`.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Maybe::Absent => Err(err),
            Maybe::Present(v) => Ok(v),
        }
    }

    /// Transforms the container into a `Result`, mapping `Present(v)` to
    /// `Ok(v)` and `Absent` to `Err(f())`.
    ///
    /// The supplier runs only on `Absent`, exactly once, and its result is
    /// returned verbatim; the caller decides what to do with the error
    /// value.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Absent => Err(f()),
            Maybe::Present(v) => Ok(v),
        }
    }

    /// Returns the container if it holds a value, else the fallback
    /// container produced by `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Absent => f(),
            Maybe::Present(v) => Maybe::Present(v),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Converts `Maybe<Maybe<T>>` to `Maybe<T>`.
    ///
    /// The nested-container requirement is a compile-time bound: this
    /// method exists only when the held value is itself a container, so
    /// misuse is rejected by the type checker rather than at runtime.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(inner) => inner,
        }
    }
}

impl<T: Clone> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(v) => Maybe::Present(v.clone()),
        }
    }
}

impl<T: Copy> Copy for Maybe<T> {}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Maybe::Absent, Maybe::Absent) => true,
            (Maybe::Present(a), Maybe::Present(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: PartialOrd> PartialOrd for Maybe<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Maybe::Absent, Maybe::Absent) => Some(std::cmp::Ordering::Equal),
            (Maybe::Absent, Maybe::Present(_)) => Some(std::cmp::Ordering::Less),
            (Maybe::Present(_), Maybe::Absent) => Some(std::cmp::Ordering::Greater),
            (Maybe::Present(a), Maybe::Present(b)) => a.partial_cmp(b),
        }
    }
}

impl<T: Ord> Ord for Maybe<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Maybe::Absent, Maybe::Absent) => std::cmp::Ordering::Equal,
            (Maybe::Absent, Maybe::Present(_)) => std::cmp::Ordering::Less,
            (Maybe::Present(_), Maybe::Absent) => std::cmp::Ordering::Greater,
            (Maybe::Present(a), Maybe::Present(b)) => a.cmp(b),
        }
    }
}

impl<T: std::hash::Hash> std::hash::Hash for Maybe<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Maybe::Absent => {
                0u8.hash(state);
            }
            Maybe::Present(v) => {
                1u8.hash(state);
                v.hash(state);
            }
        }
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `Absent`.
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Absent => write!(f, "Absent"),
            Maybe::Present(v) => write!(f, "Present({:?})", v),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Absent => write!(f, "Absent"),
            Maybe::Present(v) => write!(f, "Present {}", v),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// The null-inspecting factory: `Some(v)` builds `Present(v)`, the
    /// null-equivalent `None` builds `Absent`.
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Maybe::Absent,
            Some(v) => Maybe::Present(v),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// The `get_or_null` escape hatch for null-based APIs: `Absent`
    /// becomes the null-equivalent `None`.
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Absent => None,
            Maybe::Present(v) => Some(v),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Maybe::Absent => serializer.serialize_none(),
            Maybe::Present(v) => serializer.serialize_some(v),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let p = Maybe::Present(42);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "42");
        assert_eq!(serde_json::from_str::<Maybe<i32>>(&json).unwrap(), p);

        let a: Maybe<i32> = Maybe::Absent;
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "null");
        assert_eq!(serde_json::from_str::<Maybe<i32>>(&json).unwrap(), a);
    }

    #[test]
    fn test_serde_encoding_matches_option() {
        // Delegation through Option keeps the wire form identical.
        assert_eq!(
            serde_json::to_string(&Maybe::Present("x")).unwrap(),
            serde_json::to_string(&Some("x")).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&Maybe::<&str>::Absent).unwrap(),
            serde_json::to_string(&None::<&str>).unwrap()
        );
    }
}
