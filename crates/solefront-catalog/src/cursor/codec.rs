//! Module: cursor::codec
//! Responsibility: the versioned JSON wire format for persisting a
//! [`CursorTable`] in client-accessible string storage.
//! Does not own: query semantics or windowing; this is encode/decode only.

use crate::{
    cursor::{Cursor, CursorTable},
    filter::FilterSignature,
    order::SortMode,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Current session payload version. Bump on any incompatible change to
/// [`SessionPayload`]; older payloads then decode to an empty table and
/// the engine recomputes pages through the offset fallback.
pub const PAYLOAD_VERSION: u8 = 1;

///
/// CursorCodecError
///

#[derive(Debug, ThisError)]
pub enum CursorCodecError {
    #[error("cursor payload is not valid JSON: {message}")]
    Malformed { message: String },

    #[error("unsupported cursor payload version: {version}")]
    VersionMismatch { version: u8 },
}

#[derive(Debug, Deserialize, Serialize)]
struct SessionPayload {
    v: u8,
    scope: Option<FilterSignature>,
    entries: Vec<SessionEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
struct SessionEntry {
    sort: SortMode,
    page: u32,
    value: Option<u32>,
    id: String,
}

/// Encode a cursor table as its versioned JSON session payload.
pub fn encode_table(table: &CursorTable) -> Result<String, CursorCodecError> {
    let payload = SessionPayload {
        v: PAYLOAD_VERSION,
        scope: table.scope(),
        entries: table
            .iter()
            .map(|(key, cursor)| SessionEntry {
                sort: key.sort,
                page: key.page_index,
                value: cursor.last_sort_value,
                id: cursor.last_item_id.clone(),
            })
            .collect(),
    };

    serde_json::to_string(&payload).map_err(|err| CursorCodecError::Malformed {
        message: err.to_string(),
    })
}

/// Decode a session payload back into a cursor table.
pub fn decode_table(raw: &str) -> Result<CursorTable, CursorCodecError> {
    let payload: SessionPayload =
        serde_json::from_str(raw.trim()).map_err(|err| CursorCodecError::Malformed {
            message: err.to_string(),
        })?;
    if payload.v != PAYLOAD_VERSION {
        return Err(CursorCodecError::VersionMismatch { version: payload.v });
    }

    let mut table = payload
        .scope
        .map_or_else(CursorTable::new, CursorTable::scoped);
    for entry in payload.entries {
        table.put(entry.sort, entry.page, Cursor::new(entry.value, entry.id));
    }

    Ok(table)
}

/// Permissive decode for the request path: a stale, truncated, or
/// hand-edited payload yields an empty table instead of an error, since
/// every cursor is recomputable through the offset fallback.
#[must_use]
pub fn decode_table_or_empty(raw: Option<&str>) -> CursorTable {
    raw.and_then(|raw| decode_table(raw).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CursorTable {
        let mut table = CursorTable::scoped(FilterSignature::from_bytes([0x21; 32]));
        table.put(SortMode::PriceAsc, 1, Cursor::new(Some(120), "i-07".to_string()));
        table.put(SortMode::PriceDesc, 1, Cursor::new(Some(940), "i-02".to_string()));
        table.put(SortMode::Popularity, 2, Cursor::new(None, "i-24".to_string()));
        table
    }

    #[test]
    fn payload_round_trips() {
        let table = sample_table();
        let encoded = encode_table(&table).expect("table should encode");
        let decoded = decode_table(&encoded).expect("payload should decode");

        assert_eq!(decoded, table);
    }

    #[test]
    fn garbage_payload_decodes_to_empty_table() {
        for raw in ["", "{", "[1,2,3]", "not json at all"] {
            let table = decode_table_or_empty(Some(raw));
            assert!(table.is_empty(), "payload {raw:?}");
            assert_eq!(table.scope(), None);
        }
        assert!(decode_table_or_empty(None).is_empty());
    }

    #[test]
    fn version_mismatch_is_rejected_strictly_and_empty_permissively() {
        let encoded = encode_table(&sample_table()).expect("table should encode");
        let bumped = encoded.replace("\"v\":1", "\"v\":9");

        let err = decode_table(&bumped).expect_err("strict decode must reject");
        assert!(matches!(
            err,
            CursorCodecError::VersionMismatch { version: 9 }
        ));
        assert!(decode_table_or_empty(Some(&bumped)).is_empty());
    }
}
