//! The wrapped MAC primitive.

use keyloom_core::monitoring::{
    get_monitoring_client, keyset_info_from_primitive_set, MonitoringContext, MonitoringLogger,
    NoopLogger,
};
use keyloom_core::primitive_set::{Entry, PrimitiveSet};
use keyloom_core::{cryptofmt, CoreError, Handle, Primitive, Result};
use keyloom_crypto::{CryptoError, Mac};
use keyloom_proto::OutputPrefixType;
use std::sync::Arc;

// A Vec cannot hold more than isize::MAX bytes, so only the legacy copy
// with its one-byte suffix needs the guard.
const MAX_DATA_LEN: usize = isize::MAX as usize;

/// Create a MAC primitive from a keyset handle.
///
/// The returned MAC computes under the keyset's primary key and verifies
/// against every enabled key, routed by output prefix.
pub fn new_mac(handle: &Handle) -> Result<Arc<dyn Mac>> {
    let set = handle.primitives(|primitive| match primitive {
        Primitive::Mac(mac) => Ok(mac),
        other => Err(CoreError::WrongPrimitive {
            expected: "MAC",
            actual: other.kind(),
        }),
    })?;
    Ok(Arc::new(WrappedMac::new(set)?))
}

struct WrappedMac {
    set: PrimitiveSet<Arc<dyn Mac>>,
    primary: Arc<Entry<Arc<dyn Mac>>>,
    compute_logger: Box<dyn MonitoringLogger>,
    verify_logger: Box<dyn MonitoringLogger>,
}

impl WrappedMac {
    fn new(set: PrimitiveSet<Arc<dyn Mac>>) -> Result<WrappedMac> {
        let primary = set
            .primary()
            .cloned()
            .ok_or_else(|| CoreError::Internal("primitive set has no primary".to_string()))?;
        let (compute_logger, verify_logger) = create_loggers(&set)?;
        Ok(WrappedMac {
            set,
            primary,
            compute_logger,
            verify_logger,
        })
    }
}

fn create_loggers(
    set: &PrimitiveSet<Arc<dyn Mac>>,
) -> Result<(Box<dyn MonitoringLogger>, Box<dyn MonitoringLogger>)> {
    if set.annotations().is_empty() {
        return Ok((Box::new(NoopLogger), Box::new(NoopLogger)));
    }
    let client = get_monitoring_client();
    let keyset_info = keyset_info_from_primitive_set(set)?;
    let compute_logger = client.new_logger(&MonitoringContext {
        primitive: "mac",
        api_function: "compute",
        keyset_info: keyset_info.clone(),
    })?;
    let verify_logger = client.new_logger(&MonitoringContext {
        primitive: "mac",
        api_function: "verify",
        keyset_info,
    })?;
    Ok((compute_logger, verify_logger))
}

// Copy of `data` with the legacy 0x00 suffix. Recomputed from the caller's
// input for every attempt; the buffer handed to one key must never leak
// into the next.
fn legacy_data(data: &[u8]) -> keyloom_crypto::Result<Vec<u8>> {
    if data.len() >= MAX_DATA_LEN {
        return Err(CryptoError::DataTooLong);
    }
    let mut out = Vec::with_capacity(data.len() + 1);
    out.extend_from_slice(data);
    out.push(0);
    Ok(out)
}

impl Mac for WrappedMac {
    fn compute_mac(&self, data: &[u8]) -> keyloom_crypto::Result<Vec<u8>> {
        let primary = &self.primary;

        let owned;
        let effective: &[u8] = if primary.prefix_type() == OutputPrefixType::Legacy {
            match legacy_data(data) {
                Ok(suffixed) => {
                    owned = suffixed;
                    &owned
                }
                Err(e) => {
                    self.compute_logger.log_failure();
                    return Err(e);
                }
            }
        } else {
            data
        };

        let tag = match primary.primitive().compute_mac(effective) {
            Ok(tag) => tag,
            Err(e) => {
                self.compute_logger.log_failure();
                return Err(e);
            }
        };
        self.compute_logger.log(primary.key_id(), effective.len());

        if primary.prefix().is_empty() {
            return Ok(tag);
        }
        let mut out = Vec::with_capacity(primary.prefix().len() + tag.len());
        out.extend_from_slice(primary.prefix());
        out.extend_from_slice(&tag);
        Ok(out)
    }

    fn verify_mac(&self, mac: &[u8], data: &[u8]) -> keyloom_crypto::Result<()> {
        // Also rejects raw MACs of 5 bytes or fewer; such tags are
        // trivially forgeable.
        if mac.len() <= cryptofmt::NON_RAW_PREFIX_SIZE {
            self.verify_logger.log_failure();
            return Err(CryptoError::InvalidMac);
        }

        // Non-raw candidates first, identified by the prefix.
        let (prefix, mac_no_prefix) = mac.split_at(cryptofmt::NON_RAW_PREFIX_SIZE);
        for entry in self.set.entries_for_prefix(prefix) {
            let owned;
            let effective: &[u8] = if entry.prefix_type() == OutputPrefixType::Legacy {
                match legacy_data(data) {
                    Ok(suffixed) => {
                        owned = suffixed;
                        &owned
                    }
                    Err(e) => {
                        self.verify_logger.log_failure();
                        return Err(e);
                    }
                }
            } else {
                data
            };
            if entry.primitive().verify_mac(mac_no_prefix, effective).is_ok() {
                self.verify_logger.log(entry.key_id(), effective.len());
                return Ok(());
            }
        }

        // Raw candidates see the full MAC and untouched data.
        for entry in self.set.raw_entries() {
            if entry.primitive().verify_mac(mac, data).is_ok() {
                self.verify_logger.log(entry.key_id(), data.len());
                return Ok(());
            }
        }

        self.verify_logger.log_failure();
        Err(CryptoError::InvalidMac)
    }
}
