use crate::{cursor::codec::CursorCodecError, store::SourceError};
use thiserror::Error as ThisError;

///
/// CatalogError
///
/// Top-level failure for one catalog request. A page request either fully
/// succeeds with a (possibly empty) item sequence or fails with one of
/// these; no partial results are ever returned.
///

#[derive(Debug, ThisError)]
pub enum CatalogError {
    /// The underlying document collection failed the query. Fatal for the
    /// current request; retries belong to the transport, not this layer.
    #[error("product source query failed: {0}")]
    Source(#[from] SourceError),

    /// A persisted cursor payload could not be encoded. Decoding failures
    /// are never fatal (stale or garbage payloads fall back to an empty
    /// table), so only the encode direction surfaces here.
    #[error("cursor session payload: {0}")]
    CursorCodec(#[from] CursorCodecError),
}
