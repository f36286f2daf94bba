use serde::{Deserialize, Serialize};

use crate::model::RequestDescriptor;

/// Post-mapping inclusion/exclusion filter, keyed on `operation_id` only.
///
/// A missing or empty list means that predicate is off; whitelist and
/// blacklist compose as independent predicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestFilter {
    pub endpoint_name_whitelist: Option<Vec<String>>,
    pub endpoint_name_blacklist: Option<Vec<String>>,
}

impl RequestFilter {
    pub fn is_empty(&self) -> bool {
        self.endpoint_name_whitelist
            .as_ref()
            .is_none_or(|w| w.is_empty())
            && self
                .endpoint_name_blacklist
                .as_ref()
                .is_none_or(|b| b.is_empty())
    }

    fn keeps(&self, operation_id: &str) -> bool {
        let whitelisted = match &self.endpoint_name_whitelist {
            Some(whitelist) if !whitelist.is_empty() => {
                whitelist.iter().any(|id| id == operation_id)
            }
            _ => true,
        };
        let blacklisted = self
            .endpoint_name_blacklist
            .as_ref()
            .is_some_and(|blacklist| blacklist.iter().any(|id| id == operation_id));

        whitelisted && !blacklisted
    }
}

/// Apply a filter to a mapped descriptor list. Order-preserving; with no
/// filter configured the list passes through unchanged.
pub fn apply(
    descriptors: Vec<RequestDescriptor>,
    filter: &RequestFilter,
) -> Vec<RequestDescriptor> {
    if filter.is_empty() {
        return descriptors;
    }
    descriptors
        .into_iter()
        .filter(|d| filter.keeps(&d.operation_id))
        .collect()
}
