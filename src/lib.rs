//! Cursor-driven iteration over the redis SCAN command family.
//!
//! The scan module drives SCAN/HSCAN/SSCAN/ZSCAN round trips against an
//! injected [`ScanStore`] until the server hands the sentinel cursor back,
//! the batch sink cancels, or a client-side limit is crossed. The datagen
//! module populates fixture keyspaces for the runnable demos.

pub mod datagen;
mod scan;

pub use scan::{
    each_hscan, each_scan, each_sscan, each_zscan, flat_pairs, hscan, scan, sscan, zscan,
    RedisScanStore, ScanControl, ScanError, ScanOptions, ScanRound, ScanStore, ScanVariant,
    CURSOR_DONE,
};
