//! PDF output.
//!
//! [`PdfRenderer`] lays a [`Layout`] out on A4 pages using the base-14
//! Helvetica fonts, so no font files are embedded. Text is encoded as
//! WinAnsi; characters outside it print as `?`.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::layout::{Align, BODY_FONT_SIZE, Block, Cell, Column, Image, Layout, Table, Text, TextStyle};

/// Turns a [`Layout`] into document bytes.
pub trait Renderer: Send + Sync {
    /// Renders the layout. Errors are fatal for the document.
    fn render(&self, layout: &Layout) -> EngineResult<Vec<u8>>;
}

/// A4 width in points.
pub const A4_WIDTH: f32 = 595.0;
/// A4 height in points.
pub const A4_HEIGHT: f32 = 842.0;

const LINE_SPACING: f32 = 1.3;
const CELL_PADDING: f32 = 4.0;
const BOX_PADDING: f32 = 10.0;
const STROKE_WIDTH: f32 = 0.75;
const SHADE_GRAY: f32 = 0.9;

/// lopdf-backed renderer producing A4 PDFs.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    margin: f32,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self { margin: 40.0 }
    }
}

impl PdfRenderer {
    /// Creates a renderer with the given page margin in points.
    pub fn new(margin: f32) -> Self {
        Self { margin }
    }
}

impl Renderer for PdfRenderer {
    fn render(&self, layout: &Layout) -> EngineResult<Vec<u8>> {
        let mut writer = PageWriter::new(self, layout);
        writer.start_page();
        for block in &layout.body {
            writer.place(block);
        }
        writer.finish_page();

        let page_count = writer.pages.len();
        let bytes = writer.into_pdf()?;
        debug!(pages = page_count, size = bytes.len(), "Rendered PDF");
        Ok(bytes)
    }
}

// Helvetica advance widths for ASCII 32..=126, in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, //
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, //
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, //
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

// Helvetica-Bold runs about 6% wider than regular.
const BOLD_FACTOR: f32 = 1.06;

fn char_width(c: char, style: TextStyle, size: f32) -> f32 {
    let units = match c {
        ' '..='~' => HELVETICA_WIDTHS[(c as usize) - 32],
        '\u{2022}' => 350,
        _ => 556,
    };
    let factor = if style == TextStyle::Bold { BOLD_FACTOR } else { 1.0 };
    f32::from(units) * size / 1000.0 * factor
}

fn text_width(text: &str, style: TextStyle, size: f32) -> f32 {
    text.chars().map(|c| char_width(c, style, size)).sum()
}

fn line_height(size: f32) -> f32 {
    size * LINE_SPACING
}

/// Greedy word wrap. Always returns at least one line.
fn wrap(content: &str, style: TextStyle, size: f32, width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in content.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", line, word)
            };
            if line.is_empty() || text_width(&candidate, style, size) <= width {
                line = candidate;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            }
            split_overlong(&mut line, &mut lines, style, size, width);
        }
        lines.push(line);
    }
    lines
}

fn split_overlong(line: &mut String, lines: &mut Vec<String>, style: TextStyle, size: f32, width: f32) {
    while line.chars().count() > 1 && text_width(line, style, size) > width {
        let mut taken = 0.0;
        let mut cut = 0;
        for (idx, c) in line.char_indices() {
            let advance = char_width(c, style, size);
            if idx > 0 && taken + advance > width {
                cut = idx;
                break;
            }
            taken += advance;
        }
        if cut == 0 {
            break;
        }
        let rest = line.split_off(cut);
        lines.push(std::mem::replace(line, rest));
    }
}

fn wrap_text(text: &Text, width: f32) -> Vec<String> {
    wrap(&text.content, text.style, text.size, width)
}

fn aligned_x(align: Align, x: f32, width: f32, content_width: f32) -> f32 {
    match align {
        Align::Left => x,
        Align::Center => x + (width - content_width) / 2.0,
        Align::Right => x + width - content_width,
    }
}

fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}

fn font_name(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Regular => "F1",
        TextStyle::Bold => "F2",
        TextStyle::Italic => "F3",
    }
}

fn column_widths(weights: &[f32], width: f32) -> Vec<f32> {
    let total: f32 = weights.iter().sum();
    if total <= 0.0 {
        return vec![width / weights.len().max(1) as f32; weights.len()];
    }
    weights.iter().map(|w| width * w / total).collect()
}

/// Cells of a row with their x offset and width. Cells past the last
/// column are dropped.
fn cell_slots<'c>(row: &'c [Cell], widths: &[f32]) -> Vec<(&'c Cell, f32, f32)> {
    let mut slots = Vec::with_capacity(row.len());
    let mut column = 0;
    let mut offset = 0.0;
    for cell in row {
        let end = (column + cell.span).min(widths.len());
        if column >= end {
            break;
        }
        let width: f32 = widths[column..end].iter().sum();
        slots.push((cell, offset, width));
        offset += width;
        column = end;
    }
    slots
}

fn row_height(row: &[Cell], widths: &[f32]) -> f32 {
    cell_slots(row, widths)
        .into_iter()
        .map(|(cell, _, width)| {
            let lines = wrap_text(&cell.text, width - 2.0 * CELL_PADDING).len();
            lines as f32 * line_height(cell.text.size)
        })
        .fold(0.0, f32::max)
        + 2.0 * CELL_PADDING
}

fn image_size(image: &Image, width_px: u32, height_px: u32, available: f32) -> (f32, f32) {
    let ratio = height_px as f32 / width_px as f32;
    let mut width = image.width.min(available);
    let mut height = width * ratio;
    if let Some(max) = image.max_height {
        if height > max {
            height = max;
            width = height / ratio;
        }
    }
    (width, height)
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (u16::from(channel), u16::from(alpha));
    ((c * a + 255 * (255 - a)) / 255) as u8
}

struct EmbeddedImage {
    name: String,
    width_px: u32,
    height_px: u32,
    rgb: Vec<u8>,
}

struct PageWriter<'a> {
    renderer: &'a PdfRenderer,
    layout: &'a Layout,
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    y: f32,
    content_top: f32,
    images: Vec<EmbeddedImage>,
    decoded: Vec<(&'a [u8], Option<usize>)>,
}

impl<'a> PageWriter<'a> {
    fn new(renderer: &'a PdfRenderer, layout: &'a Layout) -> Self {
        Self {
            renderer,
            layout,
            pages: Vec::new(),
            ops: Vec::new(),
            y: A4_HEIGHT,
            content_top: A4_HEIGHT,
            images: Vec::new(),
            decoded: Vec::new(),
        }
    }

    fn content_width(&self) -> f32 {
        A4_WIDTH - 2.0 * self.renderer.margin
    }

    fn bottom(&self) -> f32 {
        self.renderer.margin
    }

    fn start_page(&mut self) {
        self.ops = vec![Operation::new("w", vec![STROKE_WIDTH.into()])];
        self.y = A4_HEIGHT - self.renderer.margin;

        let layout = self.layout;
        let (x, width) = (self.renderer.margin, self.content_width());
        for block in &layout.header {
            self.draw(block, x, width);
        }
        self.content_top = self.y;
    }

    fn finish_page(&mut self) {
        let layout = self.layout;
        if let Some(footer) = &layout.footer {
            let (x, width) = (self.renderer.margin, self.content_width());
            if let Some(line) = wrap_text(footer, width).first() {
                let line_w = text_width(line, footer.style, footer.size);
                let lx = aligned_x(footer.align, x, width, line_w);
                self.show_text(line, footer.style, footer.size, lx, self.renderer.margin / 2.0);
            }
        }
        let ops = std::mem::take(&mut self.ops);
        self.pages.push(ops);
    }

    fn new_page(&mut self) {
        self.finish_page();
        self.start_page();
    }

    fn ensure(&mut self, height: f32) {
        if self.y - height < self.bottom() && self.y < self.content_top {
            self.new_page();
        }
    }

    /// Body placement: paragraphs and tables may continue on the next page,
    /// every other block moves there whole.
    fn place(&mut self, block: &'a Block) {
        let (x, width) = (self.renderer.margin, self.content_width());
        match block {
            Block::PageBreak => self.new_page(),
            Block::Spacer(gap) => self.y = (self.y - gap).max(self.bottom()),
            Block::Text(text) => {
                for line in wrap_text(text, width) {
                    self.ensure(line_height(text.size));
                    self.draw_line(text, &line, x, width);
                }
            }
            Block::Table(table) => {
                let widths = column_widths(&table.columns, width);
                for row in &table.rows {
                    self.ensure(row_height(row, &widths));
                    self.draw_row(table, row, &widths, x);
                }
            }
            _ => {
                let height = self.measure(block, width);
                self.ensure(height);
                self.draw(block, x, width);
            }
        }
    }

    fn measure(&mut self, block: &'a Block, width: f32) -> f32 {
        match block {
            Block::Text(text) => wrap_text(text, width).len() as f32 * line_height(text.size),
            Block::Field { label, value } => {
                let label_w = text_width(label, TextStyle::Bold, BODY_FONT_SIZE);
                let lines = wrap(value, TextStyle::Regular, BODY_FONT_SIZE, (width - label_w).max(BODY_FONT_SIZE));
                lines.len() as f32 * line_height(BODY_FONT_SIZE)
            }
            Block::Spacer(gap) => *gap,
            Block::Image(image) => self
                .image(image.bytes.as_slice())
                .map(|(_, w, h)| image_size(image, w, h, width).1)
                .unwrap_or(0.0),
            Block::Table(table) => {
                let widths = column_widths(&table.columns, width);
                table.rows.iter().map(|row| row_height(row, &widths)).sum()
            }
            Block::Columns { columns, boxed } => {
                let pad = if *boxed { BOX_PADDING } else { 0.0 };
                let weights: Vec<f32> = columns.iter().map(|c| c.weight).collect();
                let widths = column_widths(&weights, width);
                let mut tallest: f32 = 0.0;
                for (column, column_w) in columns.iter().zip(widths) {
                    let mut height = 0.0;
                    for inner in &column.blocks {
                        height += self.measure(inner, column_w - 2.0 * pad);
                    }
                    tallest = tallest.max(height);
                }
                tallest + 2.0 * pad
            }
            Block::PageBreak => 0.0,
        }
    }

    fn draw(&mut self, block: &'a Block, x: f32, width: f32) {
        match block {
            Block::Text(text) => {
                for line in wrap_text(text, width) {
                    self.draw_line(text, &line, x, width);
                }
            }
            Block::Field { label, value } => self.draw_field(label, value, x, width),
            Block::Spacer(gap) => self.y -= gap,
            Block::Image(image) => self.draw_image(image, x, width),
            Block::Table(table) => {
                let widths = column_widths(&table.columns, width);
                for row in &table.rows {
                    self.draw_row(table, row, &widths, x);
                }
            }
            Block::Columns { columns, boxed } => self.draw_columns(columns, *boxed, x, width),
            Block::PageBreak => {}
        }
    }

    fn show_text(&mut self, line: &str, style: TextStyle, size: f32, x: f32, baseline: f32) {
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new("Tf", vec![font_name(style).into(), size.into()]));
        self.ops.push(Operation::new("Td", vec![x.into(), baseline.into()]));
        self.ops.push(Operation::new("Tj", vec![Object::string_literal(win_ansi(line))]));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(Operation::new("m", vec![x1.into(), y1.into()]));
        self.ops.push(Operation::new("l", vec![x2.into(), y2.into()]));
        self.ops.push(Operation::new("S", vec![]));
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: &str) {
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), y.into(), width.into(), height.into()],
        ));
        self.ops.push(Operation::new(paint, vec![]));
    }

    fn draw_line(&mut self, text: &Text, line: &str, x: f32, width: f32) {
        let line_w = text_width(line, text.style, text.size);
        let lx = aligned_x(text.align, x, width, line_w);
        let baseline = self.y - text.size;
        self.show_text(line, text.style, text.size, lx, baseline);
        if text.underline {
            self.stroke_line(lx, baseline - 2.0, lx + line_w, baseline - 2.0);
        }
        self.y -= line_height(text.size);
    }

    fn draw_field(&mut self, label: &str, value: &str, x: f32, width: f32) {
        let size = BODY_FONT_SIZE;
        let label_w = text_width(label, TextStyle::Bold, size);
        self.show_text(label, TextStyle::Bold, size, x, self.y - size);
        for line in wrap(value, TextStyle::Regular, size, (width - label_w).max(size)) {
            self.show_text(&line, TextStyle::Regular, size, x + label_w, self.y - size);
            self.y -= line_height(size);
        }
    }

    fn draw_image(&mut self, image: &'a Image, x: f32, width: f32) {
        let Some((name, width_px, height_px)) = self.image(image.bytes.as_slice()) else {
            return;
        };
        let (w, h) = image_size(image, width_px, height_px, width);
        let ix = aligned_x(image.align, x, width, w);
        let bottom = self.y - h;

        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![w.into(), 0.into(), 0.into(), h.into(), ix.into(), bottom.into()],
        ));
        self.ops.push(Operation::new("Do", vec![Object::Name(name.into_bytes())]));
        self.ops.push(Operation::new("Q", vec![]));
        self.y = bottom;
    }

    fn draw_row(&mut self, table: &Table, row: &[Cell], widths: &[f32], x: f32) {
        let height = row_height(row, widths);
        let top = self.y;

        for (cell, offset, cell_w) in cell_slots(row, widths) {
            let cx = x + offset;
            if cell.shaded {
                self.ops.push(Operation::new("q", vec![]));
                self.ops.push(Operation::new("g", vec![SHADE_GRAY.into()]));
                self.rect(cx, top - height, cell_w, height, "f");
                self.ops.push(Operation::new("Q", vec![]));
            }

            let inner = cell_w - 2.0 * CELL_PADDING;
            let mut line_top = top - CELL_PADDING;
            for line in wrap_text(&cell.text, inner) {
                let line_w = text_width(&line, cell.text.style, cell.text.size);
                let lx = aligned_x(cell.text.align, cx + CELL_PADDING, inner, line_w);
                self.show_text(&line, cell.text.style, cell.text.size, lx, line_top - cell.text.size);
                line_top -= line_height(cell.text.size);
            }

            if table.bordered {
                self.rect(cx, top - height, cell_w, height, "S");
            }
        }

        self.y = top - height;
    }

    fn draw_columns(&mut self, columns: &'a [Column], boxed: bool, x: f32, width: f32) {
        let pad = if boxed { BOX_PADDING } else { 0.0 };
        let weights: Vec<f32> = columns.iter().map(|c| c.weight).collect();
        let widths = column_widths(&weights, width);

        let top = self.y;
        let mut lowest = top;
        let mut column_x = x;
        let mut dividers = Vec::new();

        for (index, (column, column_w)) in columns.iter().zip(widths).enumerate() {
            if index > 0 {
                dividers.push(column_x);
            }
            self.y = top - pad;
            for block in &column.blocks {
                self.draw(block, column_x + pad, column_w - 2.0 * pad);
            }
            lowest = lowest.min(self.y - pad);
            column_x += column_w;
        }

        self.y = lowest;
        if boxed {
            self.rect(x, lowest, width, top - lowest, "S");
            for divider in dividers {
                self.stroke_line(divider, top, divider, lowest);
            }
        }
    }

    /// Decodes each distinct image once. Undecodable images are skipped.
    fn image(&mut self, bytes: &'a [u8]) -> Option<(String, u32, u32)> {
        let cached = self
            .decoded
            .iter()
            .find(|(source, _)| *source == bytes)
            .map(|(_, slot)| *slot);

        let slot = match cached {
            Some(slot) => slot,
            None => {
                let slot = self.decode(bytes);
                self.decoded.push((bytes, slot));
                slot
            }
        };

        slot.map(|index| {
            let image = &self.images[index];
            (image.name.clone(), image.width_px, image.height_px)
        })
    }

    fn decode(&mut self, bytes: &[u8]) -> Option<usize> {
        let decoded = match image::load_from_memory(bytes) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(error = %e, size = bytes.len(), "Skipping image that could not be decoded");
                return None;
            }
        };

        let rgba = decoded.to_rgba8();
        let (width_px, height_px) = rgba.dimensions();
        if width_px == 0 || height_px == 0 {
            return None;
        }

        let mut rgb = Vec::with_capacity(width_px as usize * height_px as usize * 3);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend([over_white(r, a), over_white(g, a), over_white(b, a)]);
        }

        self.images.push(EmbeddedImage {
            name: format!("Im{}", self.images.len() + 1),
            width_px,
            height_px,
            rgb,
        });
        Some(self.images.len() - 1)
    }

    fn into_pdf(self) -> EngineResult<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font = |base: &str| {
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base,
                "Encoding" => "WinAnsiEncoding",
            }
        };
        let regular_id = doc.add_object(font("Helvetica"));
        let bold_id = doc.add_object(font("Helvetica-Bold"));
        let italic_id = doc.add_object(font("Helvetica-Oblique"));

        let mut xobjects = Dictionary::new();
        for image in self.images {
            let stream = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => i64::from(image.width_px),
                    "Height" => i64::from(image.height_px),
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                },
                image.rgb,
            );
            let image_id = doc.add_object(stream);
            xobjects.set(image.name, image_id);
        }

        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
                "F3" => italic_id,
            },
            "XObject" => xobjects,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), A4_WIDTH.into(), A4_HEIGHT.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).map_err(|e| EngineError::RenderError {
            message: e.to_string(),
        })?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn render(layout: &Layout) -> Vec<u8> {
        PdfRenderer::default().render(layout).unwrap()
    }

    fn page_count(bytes: &[u8]) -> usize {
        Document::load_mem(bytes).unwrap().get_pages().len()
    }

    fn image_streams(bytes: &[u8]) -> usize {
        Document::load_mem(bytes)
            .unwrap()
            .objects
            .values()
            .filter(|object| match object {
                Object::Stream(stream) => {
                    matches!(stream.dict.get(b"Subtype"), Ok(Object::Name(name)) if name == b"Image")
                }
                _ => false,
            })
            .count()
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height))
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_output_is_pdf() {
        let layout = Layout {
            body: vec![Block::text("Hello")],
            ..Default::default()
        };
        let bytes = render(&layout);
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_empty_layout_still_has_a_page() {
        assert_eq!(page_count(&render(&Layout::default())), 1);
    }

    #[test]
    fn test_page_break_starts_new_page() {
        let layout = Layout {
            body: vec![Block::text("one"), Block::PageBreak, Block::text("two")],
            ..Default::default()
        };
        assert_eq!(page_count(&render(&layout)), 2);
    }

    #[test]
    fn test_long_content_flows_onto_more_pages() {
        let layout = Layout {
            header: vec![Block::text("Header")],
            body: (0..150).map(|i| Block::text(format!("Paragraph {}", i))).collect(),
            footer: Some(Text::new("footer").centered()),
        };
        assert!(page_count(&render(&layout)) >= 3);
    }

    #[test]
    fn test_tall_table_is_split_by_rows() {
        let mut table = Table::new(vec![1.0, 1.0]).bordered();
        for i in 0..120 {
            table = table.row(vec![Cell::new(format!("row {}", i)), Cell::new("value")]);
        }
        let layout = Layout {
            body: vec![Block::Table(table)],
            ..Default::default()
        };
        assert!(page_count(&render(&layout)) >= 2);
    }

    #[test]
    fn test_image_is_embedded_once_per_distinct_image() {
        let logo = Block::Image(Image {
            bytes: png(4, 2),
            width: 160.0,
            max_height: None,
            align: Align::Left,
        });
        let layout = Layout {
            header: vec![logo],
            body: vec![Block::text("page one"), Block::PageBreak, Block::text("page two")],
            footer: None,
        };
        let bytes = render(&layout);
        assert_eq!(page_count(&bytes), 2);
        assert_eq!(image_streams(&bytes), 1);
    }

    #[test]
    fn test_undecodable_image_is_skipped() {
        let layout = Layout {
            body: vec![
                Block::Image(Image {
                    bytes: b"not an image".to_vec(),
                    width: 100.0,
                    max_height: Some(50.0),
                    align: Align::Center,
                }),
                Block::text("still rendered"),
            ],
            ..Default::default()
        };
        let bytes = render(&layout);
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(image_streams(&bytes), 0);
    }

    #[test]
    fn test_columns_and_fields_render() {
        let layout = Layout {
            body: vec![Block::Columns {
                columns: vec![
                    Column::new(1.0, vec![Block::field("Name: ", "Asha Rao")]),
                    Column::new(1.0, vec![Block::field("Employee No: ", "ML-042")]),
                ],
                boxed: true,
            }],
            ..Default::default()
        };
        assert_eq!(page_count(&render(&layout)), 1);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap("aaa bbb ccc", TextStyle::Regular, 10.0, 30.0);
        assert_eq!(lines, vec!["aaa", "bbb", "ccc"]);

        let single = wrap("aaa bbb ccc", TextStyle::Regular, 10.0, 1000.0);
        assert_eq!(single, vec!["aaa bbb ccc"]);
    }

    #[test]
    fn test_wrap_keeps_explicit_line_breaks() {
        let lines = wrap("first\n\nthird", TextStyle::Regular, 10.0, 1000.0);
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn test_wrap_splits_overlong_words() {
        let lines = wrap("0123456789", TextStyle::Regular, 10.0, 20.0);
        // digits are 5.56pt wide at 10pt, three fit in 20pt
        assert_eq!(lines, vec!["012", "345", "678", "9"]);
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(win_ansi("Rs 100"), b"Rs 100".to_vec());
        assert_eq!(win_ansi("\u{2022}"), vec![0x95]);
        assert_eq!(win_ansi("\u{20b9}"), b"?".to_vec());
    }

    #[test]
    fn test_image_size_respects_max_height() {
        let image = Image {
            bytes: Vec::new(),
            width: 120.0,
            max_height: Some(65.0),
            align: Align::Left,
        };
        let (w, h) = image_size(&image, 100, 100, 500.0);
        assert_eq!((w, h), (65.0, 65.0));

        let (w, h) = image_size(&image, 200, 100, 500.0);
        assert_eq!((w, h), (120.0, 60.0));
    }
}
