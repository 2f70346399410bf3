//! String interner for identifiers.
//!
//! Every variable and parameter name is interned once by the lexer, after
//! which the parser, the environment and the printers compare and hash
//! 4-byte [`Name`]s instead of strings.

use rustc_hash::FxHashMap;
use std::fmt;

/// Interned identifier.
///
/// Only meaningful together with the [`StringInterner`] that produced it.
/// Two programs compared with [`ExprArena::structurally_eq`] must have been
/// lexed with the same interner.
///
/// [`ExprArena::structurally_eq`]: crate::ExprArena::structurally_eq
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// Maps identifier text to [`Name`] and back.
#[derive(Default)]
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the existing [`Name`] if it was seen before.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` distinct names are interned.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.map.get(text) {
            return name;
        }
        let index = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("string interner exceeded {} entries", u32::MAX));
        let name = Name(index);
        self.strings.push(text.into());
        self.map.insert(text.into(), name);
        name
    }

    /// Find the [`Name`] of already-interned text without interning it.
    pub fn get(&self, text: &str) -> Option<Name> {
        self.map.get(text).copied()
    }

    /// Resolve a [`Name`] back to its text.
    ///
    /// # Panics
    ///
    /// Panics if `name` came from a different interner with more entries.
    #[inline]
    #[track_caller]
    pub fn lookup(&self, name: Name) -> &str {
        &self.strings[name.index()]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.strings.len())
            .finish()
    }
}
