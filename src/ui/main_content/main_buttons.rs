// SPDX-License-Identifier: MPL-2.0
//! Primary call-to-action buttons.

use super::CallToAction;
use crate::i18n::{keys, MessageCatalog};
use crate::links::{self, Link};

/// The three primary buttons, in display order.
#[must_use]
pub fn build(catalog: &MessageCatalog) -> Vec<CallToAction> {
    vec![
        CallToAction {
            label: catalog.tr(keys::MAIN_INSTANCE),
            link: Some(Link::External(links::MAIN_INSTANCE_URL)),
        },
        CallToAction {
            label: catalog.tr(keys::WIKI),
            link: Some(Link::External(links::WIKI_URL)),
        },
        CallToAction {
            label: catalog.tr(keys::MASTERDATA_TOOLS),
            link: Some(Link::internal(links::MASTERDATA_TOOLS_ROUTE)),
        },
    ]
}
