//! Single-page PDF drawing surface
//!
//! Collects content-stream operations in drawing order and assembles them,
//! together with the font and image resources they reference, into a
//! complete document on [`PageCanvas::finish`].

use flate2::{write::ZlibEncoder, Compression};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use std::io::Write;

use crate::core::fonts::{encode_win_ansi, FontFace};
use crate::core::logo::Logo;
use crate::models::errors::AppResult;
use crate::models::types::Rgb;
use crate::utils::constants::{PDF_PRODUCER, TITLE};

/// Resource name of the logo XObject
pub const LOGO_RESOURCE: &str = "Im1";

/// zlib-compress a stream body
pub(crate) fn deflate(data: &[u8]) -> AppResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

fn fill_color(color: Rgb) -> Operation {
    Operation::new("rg", vec![real(color.r), real(color.g), real(color.b)])
}

fn stroke_color(color: Rgb) -> Operation {
    Operation::new("RG", vec![real(color.r), real(color.g), real(color.b)])
}

/// One page being drawn. Coordinates are PDF points, origin bottom-left.
pub struct PageCanvas<'a> {
    width: f32,
    height: f32,
    operations: Vec<Operation>,
    image: Option<&'a Logo>,
}

impl<'a> PageCanvas<'a> {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            operations: Vec::new(),
            image: None,
        }
    }

    /// Content-stream operations drawn so far
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Text with its baseline origin at `(x, y)`
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, font: FontFace, size: f32, color: Rgb) {
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.resource_name().into(), real(size)]),
            fill_color(color),
            Operation::new("Td", vec![real(x), real(y)]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Filled rectangle with lower-left corner at `(x, y)`
    pub fn draw_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.operations.extend([
            Operation::new("q", vec![]),
            fill_color(color),
            Operation::new("re", vec![real(x), real(y), real(width), real(height)]),
            Operation::new("f", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Stroked straight line
    pub fn draw_line(&mut self, start: (f32, f32), end: (f32, f32), thickness: f32, color: Rgb) {
        self.operations.extend([
            Operation::new("q", vec![]),
            stroke_color(color),
            Operation::new("w", vec![real(thickness)]),
            Operation::new("m", vec![real(start.0), real(start.1)]),
            Operation::new("l", vec![real(end.0), real(end.1)]),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Logo scaled into the box with lower-left corner at `(x, y)`
    pub fn draw_image(&mut self, logo: &'a Logo, x: f32, y: f32, width: f32, height: f32) {
        self.image = Some(logo);
        self.operations.extend([
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![real(width), real(0.0), real(0.0), real(height), real(x), real(y)],
            ),
            Operation::new("Do", vec![LOGO_RESOURCE.into()]),
            Operation::new("Q", vec![]),
        ]);
    }

    /// Assemble the one-page document and serialize it.
    ///
    /// No creation dates are written, so equal operations give equal bytes.
    pub fn finish(self) -> AppResult<Vec<u8>> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut fonts = lopdf::Dictionary::new();
        for face in FontFace::ALL {
            let font_id = doc.add_object(face.font_dictionary());
            fonts.set(face.resource_name(), font_id);
        }

        let mut resources = dictionary! { "Font" => fonts };
        if let Some(logo) = self.image {
            let image_id = logo.add_to(&mut doc);
            resources.set("XObject", dictionary! { LOGO_RESOURCE => image_id });
        }

        let content = Content {
            operations: self.operations,
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            deflate(&content.encode()?)?,
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                real(self.width),
                real(self.height),
            ],
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(TITLE),
            "Producer" => Object::string_literal(PDF_PRODUCER),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}
