//! Batch sizes for chunked API calls.
//!
//! The API rejects overly long query strings and request bodies, so bulk
//! operations split their input into fixed-size chunks and issue one
//! request per chunk, in order.

/// Maximum number of point ids per `GET /points?point_ids=...` request.
pub const POINT_ID_CHUNK_SIZE: usize = 500;

/// Maximum number of datasource hashes per `GET /points?datasource_hashes=...`
/// request. Hashes are quoted and percent-encoded, so fewer fit in a URL.
pub const DATASOURCE_CHUNK_SIZE: usize = 125;

/// Maximum number of updates per `POST /points_update` request.
pub const UPDATE_BATCH_SIZE: usize = 500;

/// Split `items` into consecutive slices of at most `size` elements.
///
/// The last slice holds the remainder. An empty input yields no slices.
/// A `size` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use onboard_core::divide_chunks;
///
/// let chunks: Vec<&[u32]> = divide_chunks(&[1, 2, 3, 4, 5], 2).collect();
/// assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
/// ```
pub fn divide_chunks<T>(items: &[T], size: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(size.max(1))
}
