//! Response compression layer.

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::{And, NotForContentType, Predicate, SizeAbove};

/// Bodies smaller than this are sent as-is; most error and adjust
/// responses fall below it.
const MIN_COMPRESS_BYTES: u16 = 256;

pub type CompressionPredicate = And<SizeAbove, NotForContentType>;

/// Gzip for JSON listings and static assets, skipping small bodies and
/// images served by the static fallback.
pub fn build_compression_layer() -> CompressionLayer<CompressionPredicate> {
    CompressionLayer::new()
        .gzip(true)
        .compress_when(SizeAbove::new(MIN_COMPRESS_BYTES).and(NotForContentType::IMAGES))
}
