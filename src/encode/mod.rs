//! # Image File Encoders
//!
//! Binary serializers for the two supported output formats. Both take a
//! finished [`PixelGrid`](crate::raster::PixelGrid), build the complete
//! file in memory, and write it with a single call; there is no
//! streaming or partial output.
//!
//! | Module | Format |
//! |--------|--------|
//! | [`bmp`] | uncompressed 16-bit 5-5-5 Windows BMP (BITMAPINFOHEADER) |
//! | [`png`] | filtered, deflate-compressed 24-bit truecolor PNG |

pub mod bmp;
pub mod png;
