use synopsis_common::{Result, SynopsisError};

/// Contiguous slice of the input text
///
/// Lengths and offsets are counted in `char`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 0-based position in the original ordering
    pub index: usize,

    /// Chunk text
    pub text: String,
}

/// Number of chunks `split_text` produces: `ceil(chars / chunk_size)`
pub fn chunk_count(text: &str, chunk_size: usize) -> usize {
    if chunk_size == 0 {
        return 0;
    }
    text.chars().count().div_ceil(chunk_size)
}

/// Split text into consecutive chunks of at most `chunk_size` chars
///
/// Concatenating the chunk texts in index order yields `text` again.
pub fn split_text(text: &str, chunk_size: usize) -> Result<Vec<Chunk>> {
    if chunk_size == 0 {
        return Err(SynopsisError::invalid_input("chunk size must be greater than 0"));
    }

    // Byte offset of every chunk_size-th char, plus the end of the string
    let mut bounds: Vec<usize> = text
        .char_indices()
        .step_by(chunk_size)
        .map(|(offset, _)| offset)
        .collect();
    bounds.push(text.len());

    Ok(bounds
        .windows(2)
        .enumerate()
        .map(|(index, w)| Chunk {
            index,
            text: text[w[0]..w[1]].to_string(),
        })
        .collect())
}

/// Per-chunk summary budget: `token_size / total_chunks`, never below `floor`
pub fn chunk_budget(token_size: usize, total_chunks: usize, floor: usize) -> usize {
    let raw = token_size.checked_div(total_chunks).unwrap_or(token_size);
    raw.max(floor)
}
