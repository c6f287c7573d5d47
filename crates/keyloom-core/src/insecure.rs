//! Explicit secret-exposing keyset access.
//!
//! Handles never leak key material through their normal API. The functions
//! here are the deliberate exceptions, for tests and for callers that
//! manage cleartext keysets themselves. Importing this module is the
//! opt-in.

use crate::errors::Result;
use crate::keyset::{self, Handle};
use keyloom_proto::Keyset;
use std::collections::HashMap;

/// Take ownership of a cleartext keyset. The keyset is validated first.
pub fn new_handle(keyset: Keyset) -> Result<Handle> {
    new_handle_with_annotations(keyset, HashMap::new())
}

/// Like [`new_handle`], with monitoring annotations attached.
pub fn new_handle_with_annotations(
    keyset: Keyset,
    annotations: HashMap<String, String>,
) -> Result<Handle> {
    keyset::validate(&keyset)?;
    Ok(Handle::from_parts(keyset, annotations))
}

/// Copy the cleartext keyset out of a handle, key material included.
pub fn keyset_material(handle: &Handle) -> Keyset {
    handle.keyset().clone()
}
