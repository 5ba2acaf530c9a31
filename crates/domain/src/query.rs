//! Reading queries — filter and paginate classified reading records.

use serde::{Deserialize, Serialize};

use crate::record::{ReadingRecord, ReadingStatus};
use crate::time::{self, Timestamp};

/// Page size used when none is given.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Filter over [`ReadingRecord`]s. Every `None` criterion matches all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingQuery {
    /// Exact sensor type, e.g. `temperatura`.
    pub sensor_type: Option<String>,
    /// Inclusive lower bound on the reading timestamp.
    pub from: Option<Timestamp>,
    /// Inclusive upper bound on the reading timestamp.
    pub to: Option<Timestamp>,
    pub status: Option<ReadingStatus>,
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
}

impl Default for ReadingQuery {
    fn default() -> Self {
        Self {
            sensor_type: None,
            from: None,
            to: None,
            status: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ReadingQuery {
    #[must_use]
    pub fn with_sensor_type(mut self, sensor_type: impl Into<String>) -> Self {
        self.sensor_type = Some(sensor_type.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: ReadingStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn between(mut self, from: Option<Timestamp>, to: Option<Timestamp>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    /// Whether `record` satisfies every criterion.
    ///
    /// When a time bound is set, records whose timestamp does not parse as
    /// RFC 3339 are excluded.
    #[must_use]
    pub fn matches(&self, record: &ReadingRecord) -> bool {
        let type_matches = self
            .sensor_type
            .as_deref()
            .is_none_or(|kind| record.sensor_type.as_deref() == Some(kind));
        if !type_matches || self.status.is_some_and(|status| record.status != status) {
            return false;
        }
        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        let Some(at) = time::parse(&record.timestamp) else {
            return false;
        };
        self.from.is_none_or(|from| at >= from) && self.to.is_none_or(|to| at <= to)
    }

    /// Keep matching records and cut out the requested page.
    #[must_use]
    pub fn paginate<I>(&self, records: I) -> ReadingPage
    where
        I: IntoIterator<Item = ReadingRecord>,
    {
        let page = self.page.max(1);
        let per_page = self.per_page.max(1);
        let matching: Vec<ReadingRecord> =
            records.into_iter().filter(|r| self.matches(r)).collect();
        let total = matching.len();
        let skip = (page as usize - 1).saturating_mul(per_page as usize);
        let items = matching
            .into_iter()
            .skip(skip)
            .take(per_page as usize)
            .collect();
        ReadingPage {
            total,
            page,
            per_page,
            items,
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingPage {
    /// Number of matching records across all pages.
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
    pub items: Vec<ReadingRecord>,
}
