use crate::*;

pub(crate) fn validate_slug(slug: &str) -> Result<(), AppStoreError> {
    if slug.trim().is_empty() {
        return Err(AppStoreError::EmptySlug);
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(AppStoreError::InvalidInput(format!(
            "Slug exceeds max length of {} bytes",
            MAX_SLUG_LEN
        )));
    }
    if !slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'-' | b'_' | b'.'))
    {
        return Err(AppStoreError::InvalidInput(
            "Slug may only contain a-z, 0-9, '-', '_' and '.'".into(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_content_ref(content_ref: &str) -> Result<(), AppStoreError> {
    if content_ref.trim().is_empty() {
        return Err(AppStoreError::EmptyContentRef);
    }
    if content_ref.len() > MAX_CONTENT_REF_LEN {
        return Err(AppStoreError::InvalidInput(format!(
            "Content reference exceeds max length of {} bytes",
            MAX_CONTENT_REF_LEN
        )));
    }
    Ok(())
}

/// Resolves `(from_index, limit)` into a skip/take pair.
pub(crate) fn page(from_index: Option<u32>, limit: Option<u32>) -> (usize, usize) {
    let start = from_index.unwrap_or(0) as usize;
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    (start, limit)
}
