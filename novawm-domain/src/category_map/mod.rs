//! A bipartite map in which every member belongs to exactly one category.
//!
//! The client model keeps two of these: one from desktops to windows and one
//! from stacking layers to windows. The structure itself knows nothing about
//! either.

pub mod errors;

pub use errors::CategoryError;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Every member is attached to exactly one registered category.
///
/// Lookups, membership tests and add/move/remove are O(1) amortized;
/// [`CategoryMultimap::members_of`] is O(size of the category). Iteration
/// order within a category is unspecified but stable between mutations.
#[derive(Debug, Clone)]
pub struct CategoryMultimap<C, M> {
    members: HashMap<C, HashSet<M>>,
    category_of: HashMap<M, C>,
}

impl<C, M> Default for CategoryMultimap<C, M> {
    fn default() -> Self {
        Self {
            members: HashMap::new(),
            category_of: HashMap::new(),
        }
    }
}

impl<C, M> CategoryMultimap<C, M>
where
    C: Copy + Eq + Hash,
    M: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map with every category from `categories` registered.
    pub fn with_categories<I: IntoIterator<Item = C>>(categories: I) -> Self {
        let mut map = Self::new();
        for category in categories {
            // Duplicates in the input are harmless.
            let _ = map.add_category(category);
        }
        map
    }

    /// Registers an empty category.
    pub fn add_category(&mut self, category: C) -> Result<(), CategoryError> {
        if self.members.contains_key(&category) {
            return Err(CategoryError::CategoryExists);
        }
        self.members.insert(category, HashSet::new());
        Ok(())
    }

    pub fn has_category(&self, category: &C) -> bool {
        self.members.contains_key(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &C> {
        self.members.keys()
    }

    /// Attaches `member` to `category`. Fails if the member is already
    /// attached anywhere or the category is unknown.
    pub fn add_member(&mut self, category: C, member: M) -> Result<(), CategoryError> {
        if self.category_of.contains_key(&member) {
            return Err(CategoryError::AlreadyMember);
        }
        let bucket = self.members.get_mut(&category).ok_or(CategoryError::UnknownCategory)?;
        bucket.insert(member);
        self.category_of.insert(member, category);
        Ok(())
    }

    /// Moves `member` to `new_category`, atomically. Moving into the category
    /// the member already has is accepted and changes nothing.
    pub fn move_member(&mut self, member: M, new_category: C) -> Result<(), CategoryError> {
        if !self.members.contains_key(&new_category) {
            return Err(CategoryError::UnknownCategory);
        }
        let old_category = *self.category_of.get(&member).ok_or(CategoryError::UnknownMember)?;
        if old_category == new_category {
            return Ok(());
        }

        if let Some(bucket) = self.members.get_mut(&old_category) {
            bucket.remove(&member);
        }
        if let Some(bucket) = self.members.get_mut(&new_category) {
            bucket.insert(member);
        }
        self.category_of.insert(member, new_category);
        Ok(())
    }

    /// Detaches `member`, returning the category it belonged to.
    pub fn remove_member(&mut self, member: M) -> Result<C, CategoryError> {
        let category = self.category_of.remove(&member).ok_or(CategoryError::UnknownMember)?;
        if let Some(bucket) = self.members.get_mut(&category) {
            bucket.remove(&member);
        }
        Ok(category)
    }

    pub fn category_of(&self, member: &M) -> Option<C> {
        self.category_of.get(member).copied()
    }

    pub fn is_member(&self, member: &M) -> bool {
        self.category_of.contains_key(member)
    }

    /// Iterates the members of `category`; empty for unknown categories.
    pub fn members_of<'a>(&'a self, category: &C) -> impl Iterator<Item = M> + 'a {
        self.members.get(category).into_iter().flat_map(|bucket| bucket.iter().copied())
    }

    pub fn count_of(&self, category: &C) -> usize {
        self.members.get(category).map_or(0, HashSet::len)
    }

    /// Iterates every `(member, category)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (M, C)> + '_ {
        self.category_of.iter().map(|(m, c)| (*m, *c))
    }

    pub fn len(&self) -> usize {
        self.category_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.category_of.is_empty()
    }
}
