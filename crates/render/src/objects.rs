//! The indexed object arena behind a document.

use crate::error::RenderError;
use std::fmt;

/// 1-based number of an indirect object. Generation is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    pub(crate) const fn reserved(number: u32) -> Self {
        ObjectId(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// The `n 0 R` form used inside dictionaries.
    pub fn reference(&self) -> String {
        format!("{} 0 R", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Serialized object bodies, numbered densely from 1 in allocation order.
///
/// The store only grows. Bodies may be allocated empty and filled in later by the
/// finalize pass, which is the only caller of [`ObjectStore::overwrite`].
#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    bodies: Vec<String>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, body: impl Into<String>) -> ObjectId {
        self.bodies.push(body.into());
        ObjectId(self.bodies.len() as u32)
    }

    pub(crate) fn overwrite(
        &mut self,
        id: ObjectId,
        body: impl Into<String>,
    ) -> Result<(), RenderError> {
        let slot = (id.0 as usize)
            .checked_sub(1)
            .and_then(|index| self.bodies.get_mut(index))
            .ok_or(RenderError::UnknownObject(id.0))?;
        *slot = body.into();
        Ok(())
    }

    pub fn get(&self, id: ObjectId) -> Option<&str> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|index| self.bodies.get(index))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &str)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (ObjectId(index as u32 + 1), body.as_str()))
    }
}
