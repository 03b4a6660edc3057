//! Process-wide cache for master-data option lists.
//!
//! Dropdown option lists change rarely and are fetched as independent
//! round trips. Responses land in the cache as they arrive; a later response
//! for the same key simply overwrites the earlier one (last response wins).

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::error::Result;
use crate::types::{EntityKind, OptionValue};

use super::OptionsSource;

static MASTER_DATA: Lazy<MasterDataCache> = Lazy::new(MasterDataCache::new);

/// Process-wide master-data cache.
pub fn master_data() -> &'static MasterDataCache {
    &MASTER_DATA
}

#[derive(Default)]
pub struct MasterDataCache {
    entries: DashMap<(EntityKind, String), Arc<Vec<OptionValue>>>,
}

impl MasterDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached options for a field, if any response has arrived.
    pub fn get(&self, entity: EntityKind, field: &str) -> Option<Arc<Vec<OptionValue>>> {
        self.entries
            .get(&(entity, field.to_string()))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Fetch options for a field unless already cached.
    pub async fn get_or_fetch(
        &self,
        source: &dyn OptionsSource,
        entity: EntityKind,
        field: &str,
    ) -> Result<Arc<Vec<OptionValue>>> {
        if let Some(cached) = self.get(entity, field) {
            return Ok(cached);
        }
        let options = Arc::new(source.fetch_options(field).await?);
        self.entries
            .insert((entity, field.to_string()), Arc::clone(&options));
        Ok(options)
    }

    /// Drop cached options for an entity after one of its records mutates.
    pub fn invalidate(&self, entity: EntityKind) {
        self.entries.retain(|(kind, _), _| *kind != entity);
    }
}
