use crate::analysis::dimension::Dimension;
use crate::reader::ReaderError;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error("{dimension} index {index} is out of range for a table of {len} slots")]
    IndexOutOfRange {
        dimension: Dimension,
        index: usize,
        len: usize,
    },
}
