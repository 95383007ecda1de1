pub mod core;

use std::{
    fmt::{Debug, Display},
    ops::Deref,
};
use thiserror::Error;

pub trait Id:
    Copy
    + Eq
    + Deref<Target = Self::Inner>
    + From<Self::Inner>
    + Display
    + Debug
{
    type Inner;
}

pub trait Entity {
    type Id: Id;

    const ENTITY_NAME: &'static str;

    fn id(&self) -> Self::Id;
}

#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("Data write error: {0}")]
    WriteError(Box<dyn std::error::Error + Send + Sync>),
}

/// IDの採番器
///
/// 1から始まり、採番のたびに1ずつ増える。一度払い出したIDは再利用しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn generate<T>(&mut self) -> Result<T, IdExhausted>
    where
        T: From<u64>,
    {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(IdExhausted)?;
        Ok(T::from(id))
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ID sequence exhausted")]
pub struct IdExhausted;

impl From<IdExhausted> for DataAccessError {
    fn from(value: IdExhausted) -> Self {
        DataAccessError::WriteError(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_sequence_starts_at_one() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.generate::<u64>().unwrap(), 1);
        assert_eq!(seq.generate::<u64>().unwrap(), 2);
        assert_eq!(seq.next, 3);
    }

    #[test]
    fn test_id_sequence_exhausted() {
        let mut seq = IdSequence { next: u64::MAX };
        assert_eq!(seq.generate::<u64>(), Err(IdExhausted));
        assert_eq!(seq.next, u64::MAX);
    }
}
