use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for the keys the backend uses to locate a record
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the key as a string (DOM ids, list keys)
    fn as_string(&self) -> String;
}

impl AggregateId for u64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }
}
