//! Section identifiers and the ordered list that holds them.

use std::borrow::Cow;
use std::fmt::Debug;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// An opaque section identifier.
///
/// Identifiers are compared by equality only; no ordering or hashing is
/// required. `is_blank` marks placeholder values (an empty string, a zero id)
/// that should be treated as "not provided" when choosing the starting section.
pub trait SectionId: Clone + PartialEq + Debug {
    fn is_blank(&self) -> bool {
        false
    }
}

impl SectionId for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl SectionId for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl SectionId for Box<str> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl SectionId for Cow<'_, str> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! integer_section_ids {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SectionId for $ty {
                fn is_blank(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

integer_section_ids!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Ordered, fixed sequence of section identifiers.
///
/// Lookup is a linear scan by equality. Duplicates are not rejected here;
/// the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionList<T>(Vec<T>);

impl<T: SectionId> SectionList<T> {
    #[must_use]
    pub fn new(sections: Vec<T>) -> Self {
        Self(sections)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.first()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Position of the first element equal to `id`.
    #[must_use]
    pub fn position(&self, id: &T) -> Option<usize> {
        self.0.iter().position(|item| item == id)
    }

    #[must_use]
    pub fn contains(&self, id: &T) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> Index<usize> for SectionList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: SectionId> From<Vec<T>> for SectionList<T> {
    fn from(sections: Vec<T>) -> Self {
        Self::new(sections)
    }
}

impl<T: SectionId, const N: usize> From<[T; N]> for SectionList<T> {
    fn from(sections: [T; N]) -> Self {
        Self::new(Vec::from(sections))
    }
}

impl<T: SectionId> FromIterator<T> for SectionList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a SectionList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
