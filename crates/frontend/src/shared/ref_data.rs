//! Application-wide cache of active products and customers.
//!
//! Entries never expire. Screens refresh them explicitly, and mutations on
//! products or customers invalidate the matching key.

use contracts::domain::a002_product::aggregate::{Product, RESOURCE as PRODUCTS};
use contracts::domain::a003_customer::aggregate::{Customer, RESOURCE as CUSTOMERS};
use contracts::domain::common::StatusLookupRequest;
use contracts::shared::api::ApiError;
use contracts::shared::ref_cache::{RefCache, ACTIVE_CUSTOMERS, ACTIVE_PRODUCTS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::HttpClient;
use crate::shared::notify::NotificationService;

#[derive(Clone, Copy)]
pub struct RefDataCache {
    cache: RwSignal<RefCache>,
    http: HttpClient,
}

impl RefDataCache {
    pub fn new(http: HttpClient) -> Self {
        Self {
            cache: RwSignal::new(RefCache::new()),
            http,
        }
    }

    pub async fn active_products(&self, force: bool) -> Result<Vec<Product>, ApiError> {
        self.cached(ACTIVE_PRODUCTS, &format!("{}/getProducts", PRODUCTS), force)
            .await
    }

    pub async fn active_customers(&self, force: bool) -> Result<Vec<Customer>, ApiError> {
        self.cached(ACTIVE_CUSTOMERS, &format!("{}/getCustomers", CUSTOMERS), force)
            .await
    }

    pub fn invalidate_products(&self) {
        self.cache.update(|c| c.clear(ACTIVE_PRODUCTS));
    }

    pub fn invalidate_customers(&self) {
        self.cache.update(|c| c.clear(ACTIVE_CUSTOMERS));
    }

    pub fn clear_all(&self) {
        self.cache.update(|c| c.clear_all());
    }

    async fn cached<T>(&self, key: &'static str, path: &str, force: bool) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Serialize,
    {
        if force {
            self.cache.update(|c| c.clear(key));
        } else if let Some(hit) = self.cache.with_untracked(|c| c.get_as::<T>(key)) {
            return Ok(hit);
        }

        let fresh: T = self.http.post(path, &StatusLookupRequest::active()).await?;
        let stored = self.cache.try_update(|c| c.put(key, &fresh)).unwrap_or(false);
        if !stored {
            log::warn!("could not cache {}", key);
        }
        Ok(fresh)
    }
}

pub fn use_ref_data() -> RefDataCache {
    use_context::<RefDataCache>().expect("RefDataCache not found")
}

/// Loads active products into `target`. With `force`, the cached copy is
/// dropped first and the outcome is reported as a notification.
pub fn load_products(
    refs: RefDataCache,
    notify: NotificationService,
    target: RwSignal<Vec<Product>>,
    force: bool,
) {
    spawn_local(async move {
        match refs.active_products(force).await {
            Ok(list) => {
                target.set(list);
                if force {
                    notify.success("Products refreshed successfully");
                }
            }
            Err(e) => {
                log::error!("active products: {}", e);
                let fallback = if force {
                    "Failed to refresh products"
                } else {
                    "Failed to load products"
                };
                notify.error(e.user_message(fallback));
            }
        }
    });
}

pub fn load_customers(
    refs: RefDataCache,
    notify: NotificationService,
    target: RwSignal<Vec<Customer>>,
    force: bool,
) {
    spawn_local(async move {
        match refs.active_customers(force).await {
            Ok(list) => {
                target.set(list);
                if force {
                    notify.success("Customers refreshed successfully");
                }
            }
            Err(e) => {
                log::error!("active customers: {}", e);
                let fallback = if force {
                    "Failed to refresh customers"
                } else {
                    "Failed to load customers"
                };
                notify.error(e.user_message(fallback));
            }
        }
    });
}
