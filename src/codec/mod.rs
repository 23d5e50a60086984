// Markd wire codec
// Encoding, decoding, and legacy-format migration of the stored collections.

pub mod bookmark_codec;
