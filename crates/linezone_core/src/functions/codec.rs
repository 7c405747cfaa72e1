//! Base64 and percent encoding of the zone.

use crate::error::OverflowError;
use crate::zone::ZoneBuffer;
use base64::Engine;

pub(super) fn base64_encode(buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(buffer.zone_text().as_bytes());
    buffer.splice_zone(&encoded)
}

/// Undecodable zones are left as they are.
pub(super) fn base64_decode(buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(buffer.zone_text().trim())
        .map_err(|err| err.to_string())
        .and_then(|bytes| String::from_utf8(bytes).map_err(|err| err.to_string()));
    match decoded {
        Ok(text) => buffer.splice_zone(&text),
        Err(reason) => {
            tracing::warn!(zone = buffer.zone_text(), %reason, "zone is not valid base64 text");
            buffer.pass_through();
            Ok(())
        }
    }
}

pub(super) fn url_encode(buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
    let encoded = urlencoding::encode(buffer.zone_text()).into_owned();
    buffer.splice_zone(&encoded)
}

/// Zones that do not decode to UTF-8 are left as they are.
pub(super) fn url_decode(buffer: &mut ZoneBuffer) -> Result<(), OverflowError> {
    let decoded = urlencoding::decode(buffer.zone_text()).map(|decoded| decoded.into_owned());
    match decoded {
        Ok(decoded) => buffer.splice_zone(&decoded),
        Err(err) => {
            tracing::warn!(zone = buffer.zone_text(), %err, "zone does not percent-decode to UTF-8");
            buffer.pass_through();
            Ok(())
        }
    }
}
