//! Path capture for form data.
//!
//! Instead of spelling a field location as a string (`"user.name.first"`),
//! callers walk to it with accessor steps and get back the key chain. Two
//! variants exist:
//!
//! - [`KeyCapture`] only records the chain, for handing to
//!   [`form_path::get`] / [`form_path::set`] later.
//! - [`BoundCapture`] is bound to a data tree, creates placeholder
//!   containers while stepping, and finishes with a read or a write.
//!
//! The [`path!`] macro captures a chain at compile time from an accessor
//! expression.
//!
//! # Example
//!
//! ```
//! use form_capture::{capture, path, Accessor, BoundCapture};
//! use serde_json::json;
//!
//! let keys = capture(|f| f.field("user").field("name").field("first"));
//! assert_eq!(keys, path!(user.name.first));
//!
//! let mut data = json!({});
//! BoundCapture::bind(&mut data)
//!     .unwrap()
//!     .field("user")
//!     .field("name")
//!     .field("first")
//!     .set(json!("Ann"))
//!     .unwrap();
//! assert_eq!(form_path::get(&data, &keys), Some(&json!("Ann")));
//! ```

mod macros;

pub mod accessor;
pub mod bound;
pub mod keys;

pub use accessor::Accessor;
pub use bound::BoundCapture;
pub use keys::{capture, KeyCapture};

pub use form_path::{Key, Path};
