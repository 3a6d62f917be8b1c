// The one-line report: `type: <dynamic type name>`.

use std::io::Write;

use tracing::debug;

use crate::error::DemoError;
use crate::handle::Handle;
use crate::hierarchy::Base;
use crate::identity::TypeIdentity;

pub const REPORT_PREFIX: &str = "type: ";

pub fn format_line(identity: &TypeIdentity) -> String {
    format!("{}{}", REPORT_PREFIX, identity)
}

/// Writes the report line for `value`, newline-terminated, and flushes.
pub fn write_report<W: Write>(out: &mut W, value: &dyn Base) -> Result<(), DemoError> {
    let identity = value.type_identity();
    debug!(concrete = identity.name(), "writing report");
    writeln!(out, "{}", format_line(&identity))?;
    out.flush()?;
    Ok(())
}

/// Full demo sequence: allocate a `Derived` behind a handle, report its
/// dynamic type, release the handle.
pub fn run<W: Write>(out: &mut W) -> Result<TypeIdentity, DemoError> {
    let handle = Handle::derived();
    write_report(out, &*handle)?;
    Ok(handle.type_identity())
}

// ============================================================================
// Tests
// ============================================================================
