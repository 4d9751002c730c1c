//! Procsnap: a snapshot reader for illumos /proc accounting records.
//!
//! The illumos process filesystem publishes per-process and per-lwp
//! accounting data as fixed-size binary records. This library reads one
//! record per call (open, single exact-size read, decode, close) and hands
//! back an owned struct; it also resolves user, group, project and zone ids
//! to names and back.
//!
//! # Features
//!
//! - **One-shot snapshot reads**: no caching, no polling; each call reads
//!   current kernel data
//! - **Whole-or-absent records**: a short or failed read is [`NotFound`],
//!   never a partially filled value
//! - **Offset-schema decoding**: record layouts are explicit constants, so
//!   decoders are testable on synthetic buffers
//! - **Injectable proc root**: point the reader at a fixture tree in tests
//!
//! # Usage
//!
//! ```no_run
//! use procsnap::{resolve, SnapshotReader};
//!
//! let reader = SnapshotReader::new();
//!
//! for pid in reader.processes() {
//!     if let Ok(info) = reader.process_info(pid) {
//!         let owner = resolve::user_name(info.uid).unwrap_or_else(|| info.uid.to_string());
//!         println!("{:>8} {:>10} {}", info.pid, owner, info.fname);
//!     }
//! }
//! ```
//!
//! # Portability
//!
//! Records are decoded with the illumos amd64 native layout and byte order
//! (see [`schema`]). Reading a live `/proc` is only correct on a matching
//! host; the decoders and the id/name resolvers for users and groups work
//! anywhere. Project and zone resolution needs the illumos namespace
//! services and reports unknown elsewhere.

pub mod decode;
pub mod error;
pub mod reader;
pub mod record;
pub mod resolve;
pub mod scan;
pub mod schema;

// Re-export main types for convenience
pub use error::{NotFound, Subject};
pub use reader::SnapshotReader;
pub use record::{LwpInfo, LwpStatus, ProcInfo, ProcStatus, ResourceUsage, Timespec};
pub use schema::RecordKind;
