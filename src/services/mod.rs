//! Services module - the conversion pipeline stages.
//!
//! # Components
//!
//! - [`archive`]: Finds ZIP exports in the input folder and unpacks their `.txt` entries
//! - [`HandHistoryTransformer`]: Applies the ordered substitution rules that turn a
//!   source-room hand history into PokerStars format
//! - [`writer`]: Reads each unpacked hand history, converts it, and saves, previews or
//!   deletes according to the [`RunConfig`](crate::models::RunConfig)
//!
//! Everything runs sequentially on the calling thread. Unexpected I/O failures are
//! returned as errors and end the run; "nothing to do" cases only log a warning.
//!
//! # Usage Example
//!
//! ```ignore
//! use hhconvert::services::HandHistoryTransformer;
//!
//! let transformer = HandHistoryTransformer::new();
//! let converted = transformer.transform("Poker Hand #HD1\nX won the pot\n");
//! assert_eq!(converted, "PokerStars Hand #201\nX collected the pot\n");
//! ```

pub mod archive;
pub mod transform;
pub mod writer;

pub use archive::{extract_all, extract_text_entries, find_archives};
pub use transform::{HERO, HandHistoryTransformer, SubstitutionRule};
pub use writer::{RunReport, find_text_files, process_text_files};
