use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::BoxError;
use crate::neighbor::{NeighborLookup, NeighborLookupResult, Neighbors};

/// Lookup over one source's ids, in display order.
///
/// With a current id it owns: its own neighbors. With a current id it does
/// not own: its last id as `pre`. Without a current id: its first id as `next`.
pub struct OrderedIdLookup {
    name: String,
    ids: Vec<String>,
    fail: bool,
}

#[async_trait]
impl NeighborLookup for OrderedIdLookup {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, current_id: Option<&str>) -> Result<NeighborLookupResult, BoxError> {
        if self.fail {
            return Err(format!("{} lookup refused", self.name).into());
        }

        let Some(current_id) = current_id else {
            let first = self.ids.first().map(String::as_str);
            return Ok(NeighborLookupResult::new(Neighbors::new(None, first), false));
        };

        match self.ids.iter().position(|id| id == current_id) {
            Some(pos) => {
                let pre = pos.checked_sub(1).map(|p| self.ids[p].as_str());
                let next = self.ids.get(pos + 1).map(String::as_str);
                Ok(NeighborLookupResult::new(Neighbors::new(pre, next), true))
            }
            None => {
                let last = self.ids.last().map(String::as_str);
                Ok(NeighborLookupResult::new(Neighbors::new(last, None), false))
            }
        }
    }
}

pub struct OrderedIdLookupFactory {
    name: String,
    ids: Vec<String>,
    fail: bool,
}

impl OrderedIdLookupFactory {
    pub fn new() -> Self {
        Self {
            name: "lookup".into(),
            ids: Vec::new(),
            fail: false,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_ids(mut self, ids: &[&str]) -> Self {
        self.ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn create(self) -> OrderedIdLookup {
        OrderedIdLookup {
            name: self.name,
            ids: self.ids,
            fail: self.fail,
        }
    }

    pub fn shared(self) -> Arc<dyn NeighborLookup> {
        Arc::new(self.create())
    }
}
