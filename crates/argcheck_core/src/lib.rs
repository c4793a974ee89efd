//! # argcheck core
//!
//! Runtime contract checks for library code.
//!
//! The crate has three parts:
//!
//! - **[`requires`]**: preconditions on caller-supplied arguments. A failure is
//!   the caller's fault and yields an [`ArgumentError`].
//! - **[`assumes`]**: invariants only the library itself can break. A failure is
//!   a library defect and yields an [`InternalError`], which is not meant to be
//!   handled.
//! - **[`format_message`]**: renders message templates and never fails, even on
//!   malformed templates or arguments, so it cannot mask the diagnostic it is
//!   building.
//!
//! All checks are pure, synchronous, and safe to call from any thread. On
//! success they hand back the value they were given.
//!
//! ## Example
//!
//! ```rust
//! use argcheck_core::{ArgumentErrorKind, Result, requires};
//!
//! fn total(prices: Option<&[Option<u32>]>) -> Result<u32> {
//!     let prices = requires::not_null_empty_or_null_elements(prices, "prices")?;
//!     Ok(prices.iter().flatten().sum())
//! }
//!
//! assert_eq!(total(Some(&[Some(2), Some(3)])).unwrap(), 5);
//!
//! let err = total(Some(&[Some(2), None])).unwrap_err();
//! assert_eq!(err.kind(), ArgumentErrorKind::NullElement);
//! assert_eq!(
//!     err.to_string(),
//!     "'prices' cannot contain a null element. (Parameter 'prices')"
//! );
//! ```

pub mod assumes;
pub mod error;
pub mod format;
pub mod messages;
pub mod requires;

pub use error::*;
pub use format::*;
pub use messages::*;
