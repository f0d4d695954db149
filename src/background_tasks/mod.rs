mod enrichment;
mod sticker_set_source;

pub use enrichment::*;
pub use sticker_set_source::*;

#[cfg(test)]
pub(crate) use enrichment::tests::PendingSource;
