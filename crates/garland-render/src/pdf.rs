// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! One-page pairing documents, one per giver.
//!
//! Each document is meant to be printed, folded, and handed to its giver
//! unopened: a greeting, the assigned recipient, optional centered artwork,
//! and an italic footer whose project label links back to the project page.
//! Documents are written as `To be opened by {giver} - {year}.pdf`, with the
//! giver name sanitized for the filesystem.
//!
//! Artwork is decorative and therefore forgiving: a missing or undecodable
//! image is skipped with a log line, never an error. I/O and PDF assembly
//! failures do surface as [`RenderError`], but by the time this module runs
//! the assignment already exists — callers should downgrade these errors to
//! warnings rather than fail the run.

use chrono::Datelike;
use garland_model::{assignment::Assignment, roster::Roster};
use printpdf::{
    image_crate::{self, GenericImageView},
    Actions, BorderArray, BuiltinFont, Color, ColorArray, HighlightingMode, Image,
    ImageTransform, IndirectFontRef, Line, LinkAnnotation, Mm, PdfDocument, PdfLayerReference,
    Point, Rect, Rgb,
};
use regex::Regex;
use std::{fs::File, io::BufWriter, path::PathBuf, sync::LazyLock};
use tracing::{debug, warn};

/// US Letter, matching the printable documents the exchange hands out.
const PAGE_WIDTH: Mm = Mm(215.9);
const PAGE_HEIGHT: Mm = Mm(279.4);

const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 14.0;
const FOOTER_SIZE: f32 = 10.0;

const PT_TO_MM: f32 = 0.352_778;

/// Characters that are unsafe in filenames on at least one platform.
static UNSAFE_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\\/:*?"<>|\x00-\x1F]"#).expect("filename pattern is valid")
});

/// The error type for pairing document generation.
#[derive(Debug)]
pub enum RenderError {
    /// An I/O error occurred while creating the output directory or a file.
    Io(std::io::Error),
    /// The PDF backend failed to assemble or serialize a document.
    Pdf(printpdf::Error),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error while writing pairing documents: {e}"),
            Self::Pdf(e) => write!(f, "PDF generation failed: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Pdf(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<printpdf::Error> for RenderError {
    fn from(e: printpdf::Error) -> Self {
        Self::Pdf(e)
    }
}

/// A configurable writer producing one pairing document per giver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingDocumentWriter {
    outdir: PathBuf,
    artwork: PathBuf,
    footer_label: String,
    footer_url: String,
}

impl PairingDocumentWriter {
    /// Creates a writer targeting `outdir`, with the default artwork path
    /// and footer.
    pub fn new(outdir: impl Into<PathBuf>) -> Self {
        Self {
            outdir: outdir.into(),
            artwork: PathBuf::from("resources/garland.png"),
            footer_label: "garland-rs/garland".to_owned(),
            footer_url: "https://github.com/garland-rs/garland".to_owned(),
        }
    }

    /// Overrides the artwork image embedded in each document. The file does
    /// not need to exist; missing artwork is skipped at write time.
    #[inline]
    pub fn with_artwork(mut self, path: impl Into<PathBuf>) -> Self {
        self.artwork = path.into();
        self
    }

    /// Overrides the footer label and the URL it links to.
    #[inline]
    pub fn with_footer(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.footer_label = label.into();
        self.footer_url = url.into();
        self
    }

    /// Writes one document per giver and returns the written paths.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the output directory cannot be created or
    /// any document fails to serialize.
    ///
    /// # Panics
    ///
    /// Panics if `assignment` was produced for a roster of a different size.
    pub fn write_all(
        &self,
        roster: &Roster,
        assignment: &Assignment,
    ) -> Result<Vec<PathBuf>, RenderError> {
        std::fs::create_dir_all(&self.outdir)?;
        let year = chrono::Local::now().year();

        let mut written = Vec::with_capacity(assignment.len());
        for (giver, recipient) in assignment.named_pairs(roster) {
            written.push(self.write_document(giver, recipient, year)?);
        }
        Ok(written)
    }

    fn write_document(
        &self,
        giver: &str,
        recipient: &str,
        year: i32,
    ) -> Result<PathBuf, RenderError> {
        let (doc, page, layer_index) = PdfDocument::new(
            format!("Gift assignment for {giver}"),
            PAGE_WIDTH,
            PAGE_HEIGHT,
            "content",
        );
        let layer = doc.get_page(page).get_layer(layer_index);

        let title_font = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let body_font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let footer_font = doc.add_builtin_font(BuiltinFont::HelveticaOblique)?;

        layer.set_fill_color(black());
        draw_centered(
            &layer,
            &format!("Hello {giver}!"),
            TITLE_SIZE,
            Mm(PAGE_HEIGHT.0 - 35.0),
            &title_font,
        );

        // Artwork goes in before the body text so the text stays on top if
        // they overlap.
        self.add_artwork(&layer);

        layer.set_fill_color(black());
        draw_centered(
            &layer,
            &format!("You have been assigned: {recipient}"),
            BODY_SIZE,
            Mm(PAGE_HEIGHT.0 - 49.0),
            &body_font,
        );

        self.add_footer(&layer, &footer_font);

        let filename = format!("To be opened by {} - {}.pdf", sanitize_filename(giver), year);
        let path = self.outdir.join(filename);
        doc.save(&mut BufWriter::new(File::create(&path)?))?;
        Ok(path)
    }

    fn add_artwork(&self, layer: &PdfLayerReference) {
        if !self.artwork.exists() {
            debug!(path = %self.artwork.display(), "no artwork found, skipping");
            return;
        }

        let decoded = match image_crate::open(&self.artwork) {
            Ok(image) => image,
            Err(err) => {
                warn!(
                    path = %self.artwork.display(),
                    error = %err,
                    "artwork could not be decoded, skipping"
                );
                return;
            }
        };

        let (width_px, height_px) = decoded.dimensions();
        if width_px == 0 || height_px == 0 {
            return;
        }

        // Placement size at the backend's default 300 dpi.
        const DEFAULT_DPI: f32 = 300.0;
        const MM_PER_INCH: f32 = 25.4;
        let native_width = width_px as f32 * MM_PER_INCH / DEFAULT_DPI;
        let native_height = height_px as f32 * MM_PER_INCH / DEFAULT_DPI;

        // Fit within 60% of the page width and 25% of its height, never
        // scaling up.
        let scale = (PAGE_WIDTH.0 * 0.6 / native_width)
            .min(PAGE_HEIGHT.0 * 0.25 / native_height)
            .min(1.0);
        let shown_width = native_width * scale;
        let shown_height = native_height * scale;

        Image::from_dynamic_image(&decoded).add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm((PAGE_WIDTH.0 - shown_width) / 2.0)),
                translate_y: Some(Mm((PAGE_HEIGHT.0 - shown_height) / 2.0)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                ..ImageTransform::default()
            },
        );
    }

    fn add_footer(&self, layer: &PdfLayerReference, font: &IndirectFontRef) {
        let prefix = "This file was generated by ";
        let prefix_width = approx_text_width_mm(prefix, FOOTER_SIZE);
        let label_width = approx_text_width_mm(&self.footer_label, FOOTER_SIZE);
        let x_start = (PAGE_WIDTH.0 - (prefix_width + label_width)) / 2.0;
        let baseline = 21.0;

        layer.set_fill_color(black());
        layer.use_text(prefix, FOOTER_SIZE, Mm(x_start), Mm(baseline), font);

        let x_label = x_start + prefix_width;
        layer.set_fill_color(link_blue());
        layer.use_text(
            self.footer_label.as_str(),
            FOOTER_SIZE,
            Mm(x_label),
            Mm(baseline),
            font,
        );

        // Underline beneath the label only.
        let underline_y = baseline - 0.7;
        layer.set_outline_color(link_blue());
        layer.set_outline_thickness(0.8);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x_label), Mm(underline_y)), false),
                (Point::new(Mm(x_label + label_width), Mm(underline_y)), false),
            ],
            is_closed: false,
        });
        layer.set_fill_color(black());

        // Clickable area covers the label with a little vertical padding.
        layer.add_link_annotation(LinkAnnotation::new(
            Rect::new(
                Mm(x_label),
                Mm(underline_y - 0.7),
                Mm(x_label + label_width),
                Mm(baseline + FOOTER_SIZE * PT_TO_MM),
            ),
            Some(BorderArray::default()),
            Some(ColorArray::default()),
            Actions::uri(self.footer_url.clone()),
            Some(HighlightingMode::Invert),
        ));
    }
}

/// Replaces characters that are unsafe in filenames with underscores.
fn sanitize_filename(name: &str) -> String {
    UNSAFE_FILENAME_CHARS.replace_all(name, "_").into_owned()
}

/// Estimates rendered text width. Builtin font metrics are not exposed by
/// the backend; widths are estimated at half an em per glyph, which is close
/// enough for centering Helvetica.
fn approx_text_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.5 * PT_TO_MM
}

fn draw_centered(
    layer: &PdfLayerReference,
    text: &str,
    font_size: f32,
    baseline: Mm,
    font: &IndirectFontRef,
) {
    let x = (PAGE_WIDTH.0 - approx_text_width_mm(text, font_size)) / 2.0;
    layer.use_text(text, font_size, Mm(x), baseline, font);
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn link_blue() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.8, None))
}
