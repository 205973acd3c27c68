mod error;
mod options;
mod session;
mod store;

pub use error::ScanError;
pub use options::{ScanOptions, ScanVariant};
pub use session::{
    each_hscan, each_scan, each_sscan, each_zscan, hscan, scan, sscan, zscan, ScanControl,
};
pub use store::{flat_pairs, RedisScanStore, ScanRound, ScanStore, CURSOR_DONE};
