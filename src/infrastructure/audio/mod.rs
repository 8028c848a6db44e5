mod format_normalizer;

pub use format_normalizer::{FormatError, normalize};
