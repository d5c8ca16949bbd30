//! Renewable resource model.

use serde::{Deserialize, Serialize};

/// A renewable resource with constant capacity.
///
/// At every time unit the summed demand of all running tasks must not
/// exceed `capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Units available per time unit.
    pub capacity: u32,
}

impl Resource {
    /// Creates a resource with the given capacity.
    pub fn new(capacity: u32) -> Self {
        Self { capacity }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_capacity() {
        let r = Resource::new(3);
        assert_eq!(r.capacity, 3);
        assert_eq!(r.with_capacity(7).capacity, 7);
    }
}
