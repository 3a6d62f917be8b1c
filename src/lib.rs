//! Runtime type identification through a base-typed owning handle.
//!
//! A `Derived` value is boxed behind a [`Handle`] whose static type is
//! `dyn Base`. Asking the handle for its [`TypeIdentity`] goes through the
//! trait's vtable, so the answer names the concrete variant rather than the
//! trait object type.
//!
//! Run with: cargo run --bin typeid_demo

pub mod error;
pub mod handle;
pub mod hierarchy;
pub mod identity;
pub mod logging;
pub mod report;

pub use error::DemoError;
pub use handle::Handle;
pub use hierarchy::{Base, Derived, PlainBase};
pub use identity::TypeIdentity;
pub use report::{format_line, run, write_report, REPORT_PREFIX};
