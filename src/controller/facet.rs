//! Facet option derivation from a record snapshot.

use std::collections::HashMap;

use unicase::UniCase;

use crate::types::{FacetOption, Id};

/// How a derived option list is ordered.
///
/// Some screens show options in the order records were traversed, others
/// alphabetically. This is deliberate per-field configuration, not a global
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Options appear in snapshot traversal order (first occurrence wins the
    /// position).
    #[default]
    Traversal,
    /// Options are sorted case-insensitively by label.
    Alphabetical,
}

/// Reduce a snapshot into a deduplicated option list for one field.
///
/// Records without a value for the field are skipped. Duplicate ids keep
/// their first-seen position, but a later occurrence overwrites the label
/// (last write wins).
pub fn derive_options<R>(
    records: &[R],
    extract: fn(&R) -> Option<FacetOption>,
    sort: SortPolicy,
) -> Vec<FacetOption> {
    let mut options: Vec<FacetOption> = Vec::new();
    let mut positions: HashMap<Id, usize> = HashMap::new();

    for record in records {
        let Some(option) = extract(record) else {
            continue;
        };
        if option.label.is_empty() {
            continue;
        }
        match positions.get(&option.id) {
            Some(&index) => {
                options[index] = option;
            }
            None => {
                positions.insert(option.id.clone(), options.len());
                options.push(option);
            }
        }
    }

    if sort == SortPolicy::Alphabetical {
        options.sort_by(|a, b| UniCase::new(&a.label).cmp(&UniCase::new(&b.label)));
    }

    options
}
