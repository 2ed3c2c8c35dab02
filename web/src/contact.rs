use serde::{Deserialize, Serialize};
use shared_types::{digits_and_plus, TrackedNumber};

use crate::attribution::{AttributionStorage, AttributionStore};

/// Phone number to display and the `tel:` link bound to call buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNumber {
    pub phone: String,
    pub dial_href: String,
}

impl ContactNumber {
    pub fn new(phone: impl Into<String>) -> Self {
        let phone = phone.into();
        Self {
            dial_href: dial_href(&phone),
            phone,
        }
    }
}

pub fn dial_href(phone: &str) -> String {
    format!("tel:{}", digits_and_plus(phone))
}

/// Picks the tracked number, then the location phone, then the business-wide
/// default. A blank location phone counts as missing.
pub fn resolve_contact(
    tracked: Option<&TrackedNumber>,
    default_business_phone: &str,
    location_phone: Option<&str>,
) -> ContactNumber {
    let location_phone = location_phone.filter(|phone| !phone.trim().is_empty());
    let phone = tracked
        .map(TrackedNumber::as_str)
        .or(location_phone)
        .unwrap_or(default_business_phone);
    ContactNumber::new(phone)
}

/// [`resolve_contact`] fed from an [`AttributionStore`].
pub struct ContactResolver<'a, S> {
    store: &'a AttributionStore<S>,
}

impl<'a, S: AttributionStorage> ContactResolver<'a, S> {
    pub fn new(store: &'a AttributionStore<S>) -> Self {
        Self { store }
    }

    pub fn resolve(&self, default_business_phone: &str, location_phone: Option<&str>) -> ContactNumber {
        let tracked = self.store.tracked();
        resolve_contact(tracked.as_ref(), default_business_phone, location_phone)
    }
}
