//! Logo asset decoding
//!
//! The PNG is decoded once and kept as Flate-compressed sample data, ready to
//! be dropped into any number of documents as an image XObject.

use image::ImageFormat;
use lopdf::{dictionary, Document, ObjectId, Stream};
use tracing::debug;

use crate::core::canvas::deflate;
use crate::models::errors::{AppError, AppResult};

/// Decoded raster logo
#[derive(Debug, Clone)]
pub struct Logo {
    width: u32,
    height: u32,
    /// 8-bit RGB samples, zlib-compressed
    rgb: Vec<u8>,
    /// 8-bit alpha samples, zlib-compressed; absent for opaque images
    alpha: Option<Vec<u8>>,
}

impl Logo {
    /// Decode PNG bytes. Empty input is a missing asset, anything the PNG
    /// decoder rejects is a corrupt one.
    pub fn decode(bytes: &[u8]) -> AppResult<Self> {
        if bytes.is_empty() {
            return Err(AppError::asset_not_found("Logo image is empty"));
        }

        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;

        let (width, height) = (image.width(), image.height());
        let has_alpha = image.color().has_alpha();
        let rgba = image.to_rgba8();

        let pixel_count = (width as usize) * (height as usize);
        let mut rgb = Vec::with_capacity(pixel_count * 3);
        let mut alpha = Vec::with_capacity(if has_alpha { pixel_count } else { 0 });
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[r, g, b]);
            if has_alpha {
                alpha.push(a);
            }
        }

        debug!(width, height, has_alpha, "Logo decoded");

        Ok(Self {
            width,
            height,
            rgb: deflate(&rgb)?,
            alpha: if has_alpha { Some(deflate(&alpha)?) } else { None },
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Drawn size in points when each pixel maps to `factor` points
    pub fn scaled(&self, factor: f32) -> (f32, f32) {
        (self.width as f32 * factor, self.height as f32 * factor)
    }

    /// Add the image (and its soft mask) to `doc`, returning the XObject id
    pub(crate) fn add_to(&self, doc: &mut Document) -> ObjectId {
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(self.width),
            "Height" => i64::from(self.height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        };

        if let Some(alpha) = &self.alpha {
            let mask_id = doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => i64::from(self.width),
                    "Height" => i64::from(self.height),
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8,
                    "Filter" => "FlateDecode",
                },
                alpha.clone(),
            ));
            dict.set("SMask", mask_id);
        }

        doc.add_object(Stream::new(dict, self.rgb.clone()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use flate2::read::ZlibDecoder;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::{Cursor, Read};

    // lopdf refuses to decompress image streams itself
    fn inflate(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    /// Small translucent PNG for renderer tests
    pub(crate) fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([0, 153, 128, 200]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_dimensions() {
        let logo = Logo::decode(&sample_png(100, 40)).unwrap();
        assert_eq!(logo.width(), 100);
        assert_eq!(logo.height(), 40);
        assert!(logo.has_alpha());

        let (w, h) = logo.scaled(0.22);
        assert!((w - 22.0).abs() < 1e-4);
        assert!((h - 8.8).abs() < 1e-4);
    }

    #[test]
    fn test_opaque_png_has_no_mask() {
        let image = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let logo = Logo::decode(&bytes).unwrap();
        assert!(!logo.has_alpha());
    }

    #[test]
    fn test_empty_is_missing() {
        let err = Logo::decode(&[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::AssetNotFound);
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let err = Logo::decode(b"definitely not a png").unwrap_err();
        assert_eq!(err.code, ErrorCode::AssetCorrupt);

        let mut truncated = sample_png(10, 10);
        truncated.truncate(20);
        assert_eq!(Logo::decode(&truncated).unwrap_err().code, ErrorCode::AssetCorrupt);
    }

    #[test]
    fn test_add_to_document_with_mask() {
        let logo = Logo::decode(&sample_png(8, 8)).unwrap();
        let mut doc = Document::with_version("1.7");
        let id = logo.add_to(&mut doc);

        let stream = doc.get_object(id).unwrap().as_stream().unwrap();
        assert_eq!(stream.dict.get(b"Width").unwrap().as_i64().unwrap(), 8);
        assert_eq!(inflate(&stream.content).len(), 8 * 8 * 3);

        let mask_id = stream.dict.get(b"SMask").unwrap().as_reference().unwrap();
        let mask = doc.get_object(mask_id).unwrap().as_stream().unwrap();
        assert_eq!(mask.dict.get(b"ColorSpace").unwrap().as_name().unwrap(), b"DeviceGray");
        assert_eq!(inflate(&mask.content).len(), 8 * 8);
    }
}
