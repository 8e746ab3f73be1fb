//! In-memory TLD metadata cache.
//!
//! The full TLD list is fetched once and kept for a fixed lifetime
//! (24 hours by default). Queries are answered from the snapshot with
//! filtering, optional sorting and pagination.
//!
//! The snapshot sits behind an async mutex that is held across a refresh,
//! so concurrent queries hitting an empty or stale cache wait for a single
//! upstream fetch instead of issuing their own.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::error::RegistrarResult;
use super::tld::TldInfo;

/// Default snapshot lifetime.
pub const DEFAULT_TLD_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

const DEFAULT_PAGE: usize = 1;
const DEFAULT_PAGE_SIZE: usize = 50;

/// Source of the full TLD list.
#[async_trait]
pub trait TldSource: Send + Sync {
    async fn fetch_tlds(&self) -> RegistrarResult<Vec<TldInfo>>;
}

/// Sort field for TLD queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TldSortField {
    /// Alphabetical by name
    Name,
    /// Registrar order (the list arrives ranked)
    Popularity,
}

/// Filters and paging for a TLD query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TldQuery {
    /// Case-insensitive substring of the TLD name
    #[serde(default)]
    pub search: Option<String>,

    /// Category the TLD must belong to
    #[serde(default)]
    pub category: Option<String>,

    /// Only TLDs that can (true) or cannot (false) be registered via the API
    #[serde(default)]
    pub registerable: Option<bool>,

    /// Page number, 1-based (default: 1)
    #[serde(default)]
    pub page: Option<usize>,

    /// Results per page (default: 50)
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Sort order (default: registrar order)
    #[serde(default)]
    pub sort_by: Option<TldSortField>,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TldPage {
    pub tlds: Vec<TldInfo>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone)]
struct Snapshot {
    entries: Arc<[TldInfo]>,
    fetched_at: Instant,
}

/// Time-expiring cache over a [`TldSource`].
pub struct TldCache {
    source: Arc<dyn TldSource>,
    ttl: Duration,
    snapshot: Mutex<Option<Snapshot>>,
}

impl TldCache {
    pub fn new(source: Arc<dyn TldSource>) -> Self {
        Self::with_ttl(source, DEFAULT_TLD_CACHE_TTL)
    }

    pub fn with_ttl(source: Arc<dyn TldSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            snapshot: Mutex::new(None),
        }
    }

    /// Answer a query, refreshing first if the snapshot is missing or stale.
    pub async fn get_tlds(&self, query: &TldQuery) -> RegistrarResult<TldPage> {
        let entries = self.ensure_fresh().await?;
        Ok(run_query(&entries, query))
    }

    /// Refetch now regardless of age.
    ///
    /// On failure the previous snapshot, if any, stays in place.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> RegistrarResult<usize> {
        let mut guard = self.snapshot.lock().await;
        let snapshot = self.fetch().await?;
        let count = snapshot.entries.len();
        *guard = Some(snapshot);
        Ok(count)
    }

    /// Drop the snapshot; the next query fetches again.
    pub async fn invalidate(&self) {
        info!("Invalidating TLD cache");
        *self.snapshot.lock().await = None;
    }

    /// Number of cached entries, if a snapshot is present.
    pub async fn cached_len(&self) -> Option<usize> {
        self.snapshot
            .lock()
            .await
            .as_ref()
            .map(|s| s.entries.len())
    }

    async fn ensure_fresh(&self) -> RegistrarResult<Arc<[TldInfo]>> {
        let mut guard = self.snapshot.lock().await;

        if let Some(snapshot) = guard.as_ref() {
            if snapshot.fetched_at.elapsed() <= self.ttl {
                return Ok(Arc::clone(&snapshot.entries));
            }
            debug!("TLD cache is stale, refreshing");
        } else {
            debug!("TLD cache is empty, fetching");
        }

        let snapshot = self.fetch().await?;
        let entries = Arc::clone(&snapshot.entries);
        *guard = Some(snapshot);
        Ok(entries)
    }

    async fn fetch(&self) -> RegistrarResult<Snapshot> {
        match self.source.fetch_tlds().await {
            Ok(tlds) => {
                info!("TLD cache loaded with {} entries", tlds.len());
                Ok(Snapshot {
                    entries: tlds.into(),
                    fetched_at: Instant::now(),
                })
            }
            Err(e) => {
                warn!("TLD list fetch failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Filter, sort and paginate a snapshot.
fn run_query(entries: &[TldInfo], query: &TldQuery) -> TldPage {
    let search = query.search.as_deref().map(str::to_lowercase);

    let mut matches: Vec<&TldInfo> = entries
        .iter()
        .filter(|tld| {
            search
                .as_deref()
                .is_none_or(|s| tld.name.to_lowercase().contains(s))
        })
        .filter(|tld| {
            query
                .registerable
                .is_none_or(|r| tld.is_api_registerable == r)
        })
        .filter(|tld| query.category.as_deref().is_none_or(|c| tld.in_category(c)))
        .collect();

    if query.sort_by == Some(TldSortField::Name) {
        matches.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let page = query.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
    let page_size = query
        .page_size
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let total_count = matches.len();
    let total_pages = total_count.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);

    TldPage {
        tlds: matches[start..end].iter().map(|t| (*t).clone()).collect(),
        total_count,
        page,
        page_size,
        total_pages,
    }
}
