//! # Payment Files
//!
//! Validates and parses fixed-width bank payment files in two legacy record
//! formats and emits a normalized stream of payment events to a receiver.
//!
//! ## Design Principles
//!
//! - **Exact decimals**: all amounts use `rust_decimal`; declared totals are
//!   cross-checked with exact comparison, never floating point
//! - **Validate before emit**: a file is fully syntax- and semantically
//!   validated before the first receiver call, so a malformed file never
//!   causes a partial emission
//! - **Format by filename**: each processor claims files by naming
//!   convention; content is never sniffed
//!
//! ## Example
//!
//! ```no_run
//! use payment_files::{LoggingReceiver, MultiFormatProcessor, PaymentFileProcessor};
//! use std::path::Path;
//!
//! let processor = MultiFormatProcessor::with_default_formats();
//! let mut receiver = LoggingReceiver;
//! let handled = processor
//!     .process_file(Path::new("Exempelfil_betalningsservice.txt"), &mut receiver)
//!     .unwrap();
//! ```

pub mod amount;
pub mod betalningsservice;
pub mod error;
pub mod field;
pub mod inbetalningstjansten;
pub mod latin1;
pub mod processor;
pub mod receiver;

pub use betalningsservice::BetalningsserviceProcessor;
pub use error::{ProcessError, RecordKind, Result};
pub use inbetalningstjansten::InbetalningstjanstenProcessor;
pub use processor::{MultiFormatProcessor, PaymentFileProcessor};
pub use receiver::{LoggingReceiver, PaymentReceiver};
