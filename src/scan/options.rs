use core::fmt;
use std::fmt::Formatter;

use super::error::ScanError;

/// 扫描变体，对应 SCAN/HSCAN/SSCAN/ZSCAN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanVariant {
    Generic,
    Hash,
    Set,
    SortedSet,
}

impl ScanVariant {
    pub fn command(&self) -> &'static str {
        match self {
            ScanVariant::Generic => "SCAN",
            ScanVariant::Hash => "HSCAN",
            ScanVariant::Set => "SSCAN",
            ScanVariant::SortedSet => "ZSCAN",
        }
    }

    /// Hash/Set/SortedSet scans address a named container; the generic
    /// keyspace scan does not.
    pub fn requires_container(&self) -> bool {
        !matches!(self, ScanVariant::Generic)
    }
}

impl fmt::Display for ScanVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Per-session scan configuration.
///
/// All fields are optional with the defaults below; `validate` runs once at
/// session start so a bad combination fails before the first round trip.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// which scan command to drive; default Generic
    pub variant: ScanVariant,
    /// name of the hash/set/sorted set being scanned; required for the
    /// container variants, ignored for Generic
    pub container_key: Option<String>,
    /// COUNT hint advising the server how much work to do per round trip;
    /// omitted (or zero) means the server default
    pub count: Option<usize>,
    /// TYPE filter, generic keyspace scans only
    pub type_filter: Option<String>,
    /// client-side cap on the total number of delivered slots; checked after
    /// the batch that crosses it, so deliveries may exceed the cap
    pub limit: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            variant: ScanVariant::Generic,
            container_key: None,
            count: None,
            type_filter: None,
            limit: None,
        }
    }
}

impl ScanOptions {
    pub fn with_variant(mut self, variant: ScanVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_container_key(mut self, key: &str) -> Self {
        self.container_key = Some(key.to_string());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_type_filter(mut self, type_filter: &str) -> Self {
        self.type_filter = Some(type_filter.to_string());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    // COUNT is only sent when the hint is positive
    pub(crate) fn count_hint(&self) -> Option<usize> {
        self.count.filter(|c| *c > 0)
    }

    pub fn validate(&self, pattern: &str) -> Result<(), ScanError> {
        if pattern.is_empty() {
            return Err(ScanError::config("match pattern must not be empty"));
        }
        if self.variant.requires_container() {
            match self.container_key {
                Some(ref key) if !key.is_empty() => {}
                _ => {
                    return Err(ScanError::config(format!(
                        "{} requires a container key",
                        self.variant
                    )));
                }
            }
        }
        Ok(())
    }
}
