// SPDX-License-Identifier: MPL-2.0
//! Placeholder links to further Data Store instances.

use super::CallToAction;
use crate::i18n::{keys, MessageCatalog};

/// Number of placeholder slots shown below the primary buttons.
pub const SLOTS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct OtherInstancesModel {
    pub title: String,
    pub entries: Vec<CallToAction>,
}

impl OtherInstancesModel {
    #[must_use]
    pub fn new(catalog: &MessageCatalog) -> Self {
        // TODO: point the slots at real instances once their URLs are published.
        let entries = (0..SLOTS)
            .map(|_| CallToAction {
                label: catalog.tr(keys::ANOTHER_INSTANCE),
                link: None,
            })
            .collect();

        Self {
            title: catalog.tr(keys::OTHER_INSTANCES_TITLE),
            entries,
        }
    }
}
