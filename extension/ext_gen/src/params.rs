//! Parameter-List Algebra
//!
//! Builds the comma-joined views of an arity's parameter slots that every
//! generated artifact pairs at its definition and call sites:
//!
//! | View | Arity 2, no prefix |
//! |------|--------------------|
//! | header | `class Param1, class Param2` |
//! | types | `Param1, Param2` |
//! | declarations | `Param1 p1, Param2 p2` |
//! | names | `p1, p2` |
//!
//! A fixed prefix (e.g. `Interface, Info`) is emitted verbatim ahead of the
//! slots in every view. All views of one list share the same slot order, and
//! an empty list renders as the empty string with no stray separator.

use smallvec::SmallVec;

/// Stem of generated type parameter names (`Param1`, `Param2`, ...).
pub const TYPE_STEM: &str = "Param";

/// Stem of generated value parameter names (`p1`, `p2`, ...).
pub const NAME_STEM: &str = "p";

/// Separator between list entries.
pub const SEPARATOR: &str = ", ";

/// One positional parameter slot, numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(usize);

impl Slot {
    /// Slot with the given 1-based position.
    pub fn new(position: usize) -> Self {
        debug_assert!(position > 0, "slots are numbered from 1");
        Slot(position)
    }

    /// 1-based position.
    #[inline]
    pub fn position(self) -> usize {
        self.0
    }

    /// `Param{n}`
    pub fn type_name(self) -> String {
        format!("{TYPE_STEM}{}", self.0)
    }

    /// `p{n}`
    pub fn value_name(self) -> String {
        format!("{NAME_STEM}{}", self.0)
    }

    /// `Param{n} p{n}`
    pub fn declaration(self) -> String {
        format!("{TYPE_STEM}{n} {NAME_STEM}{n}", n = self.0)
    }

    /// `class Param{n}`, optionally defaulted to `void`.
    pub fn header(self, default_void: bool) -> String {
        if default_void {
            format!("class {TYPE_STEM}{} = void", self.0)
        } else {
            format!("class {TYPE_STEM}{}", self.0)
        }
    }
}

/// The parameter slots of one arity plus an optional fixed prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamList<'a> {
    arity: usize,
    prefix: SmallVec<[&'a str; 4]>,
}

impl<'a> ParamList<'a> {
    /// Slots `1..=arity` with no prefix.
    pub fn new(arity: usize) -> Self {
        ParamList {
            arity,
            prefix: SmallVec::new(),
        }
    }

    /// Prepend fixed entries, emitted verbatim in every view.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &[&'a str]) -> Self {
        self.prefix = prefix.iter().copied().collect();
        self
    }

    /// Number of value slots (excluding the prefix).
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The fixed prefix entries.
    pub fn prefix(&self) -> &[&'a str] {
        &self.prefix
    }

    /// Total number of entries in every view.
    pub fn len(&self) -> usize {
        self.prefix.len() + self.arity
    }

    /// Whether every view renders as the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots in left-to-right order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> {
        (1..=self.arity).map(Slot::new)
    }

    /// Template header list: `class Param1, class Param2 = void, ...`.
    ///
    /// `default_void` should only be set for the maximum configured arity so
    /// lower arities stay valid partial specializations of the same template.
    pub fn header(&self, default_void: bool) -> String {
        self.join(self.slots().map(|slot| slot.header(default_void)))
    }

    /// Type-only list: `Param1, Param2, ...`.
    pub fn types(&self) -> String {
        self.join(self.slots().map(Slot::type_name))
    }

    /// Declaration list: `Param1 p1, Param2 p2, ...`.
    pub fn declarations(&self) -> String {
        self.join(self.slots().map(Slot::declaration))
    }

    /// Call-site name list: `p1, p2, ...`.
    pub fn names(&self) -> String {
        self.join(self.slots().map(Slot::value_name))
    }

    fn join(&self, slots: impl Iterator<Item = String>) -> String {
        let mut out = String::with_capacity(self.len() * 12);
        let entries = self.prefix.iter().map(|p| (*p).to_string()).chain(slots);
        for (i, entry) in entries.enumerate() {
            if i > 0 {
                out.push_str(SEPARATOR);
            }
            out.push_str(&entry);
        }
        out
    }
}

/// `name<types>` or just `name` when `types` is empty.
pub fn instantiate(name: &str, types: &str) -> String {
    let mut out = String::with_capacity(name.len() + types.len() + 2);
    out.push_str(name);
    if !types.is_empty() {
        out.push('<');
        out.push_str(types);
        out.push('>');
    }
    out
}

#[cfg(test)]
mod tests;
