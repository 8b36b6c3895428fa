//! Cursor pagination over a key-ordered collection.
//!
//! Backends fetch `limit + 1` rows in a single query; the extra row,
//! when present, is the "there are more pages" signal. The split of
//! that over-fetched batch into a page plus continuation cursor lives
//! here so every backend (SeaORM, in-memory) shares it.

/// One page of a cursor-based scan.
///
/// `last_evaluated_key` is the key of the last item actually included,
/// or the empty string when the scan has reached the end. Callers must
/// check for the empty string before continuing — feeding it back as
/// the start key restarts the scan from the beginning.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    pub last_evaluated_key: String,
}

/// Split an over-fetched batch (up to `limit + 1` rows, key-ascending)
/// into a page of at most `limit` items and its continuation cursor.
///
/// `limit <= 0` means unlimited: the whole batch is the final page.
pub fn split_page<T, K>(mut rows: Vec<T>, limit: i64, key_of: K) -> CursorPage<T>
where
    K: Fn(&T) -> &str,
{
    let has_more = limit > 0 && rows.len() as i64 > limit;
    if has_more {
        rows.truncate(limit as usize);
    }

    let last_evaluated_key = if has_more {
        // limit > 0, so the truncated page is non-empty
        rows.last().map(|r| key_of(r).to_string()).unwrap_or_default()
    } else {
        String::new()
    };

    CursorPage {
        items: rows,
        last_evaluated_key,
    }
}
