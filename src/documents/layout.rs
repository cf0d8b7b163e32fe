//! Page-independent description of a document.
//!
//! Composers build a [`Layout`] out of [`Block`]s; a [`Renderer`](super::Renderer)
//! turns it into bytes. Keeping the two apart lets document content be
//! tested as plain text.

/// Font face for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// Helvetica.
    #[default]
    Regular,
    /// Helvetica-Bold.
    Bold,
    /// Helvetica-Oblique.
    Italic,
}

/// Horizontal alignment within the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Flush left.
    #[default]
    Left,
    /// Centred.
    Center,
    /// Flush right.
    Right,
}

/// Default body font size in points.
pub const BODY_FONT_SIZE: f32 = 11.0;

/// A paragraph of text. Wraps to the available width; `\n` forces a break.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The text itself.
    pub content: String,
    /// Font face.
    pub style: TextStyle,
    /// Font size in points.
    pub size: f32,
    /// Alignment.
    pub align: Align,
    /// Draw a line under the text.
    pub underline: bool,
}

impl Text {
    /// Regular body text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::Regular,
            size: BODY_FONT_SIZE,
            align: Align::Left,
            underline: false,
        }
    }

    /// Switches to the bold face.
    pub fn bold(mut self) -> Self {
        self.style = TextStyle::Bold;
        self
    }

    /// Switches to the oblique face.
    pub fn italic(mut self) -> Self {
        self.style = TextStyle::Italic;
        self
    }

    /// Sets the font size.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Centres the text.
    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    /// Right-aligns the text.
    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    /// Underlines the text.
    pub fn underlined(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Cell text.
    pub text: Text,
    /// Number of columns covered.
    pub span: usize,
    /// Fill with a light grey background.
    pub shaded: bool,
}

impl Cell {
    /// A plain single-column cell.
    pub fn new(content: impl Into<String>) -> Self {
        Self::text(Text::new(content))
    }

    /// A single-column cell holding styled text.
    pub fn text(text: Text) -> Self {
        Self {
            text,
            span: 1,
            shaded: false,
        }
    }

    /// Makes the cell cover `span` columns.
    pub fn span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Shades the cell background.
    pub fn shaded(mut self) -> Self {
        self.shaded = true;
        self
    }
}

/// A grid of cells. Column widths are relative weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Relative column widths.
    pub columns: Vec<f32>,
    /// Rows of cells; spans in a row should add up to the column count.
    pub rows: Vec<Vec<Cell>>,
    /// Draw cell borders.
    pub bordered: bool,
}

impl Table {
    /// An empty table with the given relative column widths.
    pub fn new(columns: Vec<f32>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            bordered: false,
        }
    }

    /// Turns on cell borders.
    pub fn bordered(mut self) -> Self {
        self.bordered = true;
        self
    }

    /// Appends a row.
    pub fn row(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(cells);
        self
    }
}

/// An embedded raster image, scaled to fit `width` x `max_height`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Encoded image file (PNG or JPEG).
    pub bytes: Vec<u8>,
    /// Maximum width in points.
    pub width: f32,
    /// Maximum height in points; `None` keeps the aspect ratio at full width.
    pub max_height: Option<f32>,
    /// Alignment.
    pub align: Align,
}

/// One side-by-side column with a relative width.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Relative width.
    pub weight: f32,
    /// Stacked content.
    pub blocks: Vec<Block>,
}

impl Column {
    /// A column of the given weight.
    pub fn new(weight: f32, blocks: Vec<Block>) -> Self {
        Self { weight, blocks }
    }
}

/// A unit of vertical layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A paragraph.
    Text(Text),
    /// A bold label followed by a regular value on the same line.
    Field {
        /// Bold label, including any trailing separator.
        label: String,
        /// Value text.
        value: String,
    },
    /// Vertical gap in points.
    Spacer(f32),
    /// An image.
    Image(Image),
    /// A table.
    Table(Table),
    /// Side-by-side columns, optionally boxed with a divider.
    Columns {
        /// The columns, left to right.
        columns: Vec<Column>,
        /// Draw an outer border and dividers.
        boxed: bool,
    },
    /// Start a new page.
    PageBreak,
}

impl Block {
    /// Shorthand for a plain text block.
    pub fn text(content: impl Into<String>) -> Self {
        Block::Text(Text::new(content))
    }

    /// Shorthand for a label/value block.
    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Block::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    fn collect_lines(&self, out: &mut Vec<String>) {
        match self {
            Block::Text(text) => out.extend(text.content.lines().map(str::to_string)),
            Block::Field { label, value } => out.push(format!("{}{}", label, value)),
            Block::Table(table) => {
                for row in &table.rows {
                    let cells: Vec<&str> = row.iter().map(|c| c.text.content.as_str()).collect();
                    out.push(cells.join(" | "));
                }
            }
            Block::Columns { columns, .. } => {
                for column in columns {
                    for block in &column.blocks {
                        block.collect_lines(out);
                    }
                }
            }
            Block::Spacer(_) | Block::Image(_) | Block::PageBreak => {}
        }
    }
}

/// A complete document: header and footer repeat on every page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    /// Blocks drawn at the top of every page.
    pub header: Vec<Block>,
    /// Main flow.
    pub body: Vec<Block>,
    /// Single centred line at the bottom of every page.
    pub footer: Option<Text>,
}

impl Layout {
    /// Every line of text in reading order: header, body, footer.
    ///
    /// Table rows come out as their cell texts joined with `" | "`.
    ///
    /// ```
    /// use payroll_docs::documents::{Block, Cell, Layout, Table};
    ///
    /// let layout = Layout {
    ///     body: vec![
    ///         Block::text("Hello"),
    ///         Block::Table(Table::new(vec![1.0, 1.0]).row(vec![Cell::new("a"), Cell::new("b")])),
    ///     ],
    ///     ..Default::default()
    /// };
    /// assert_eq!(layout.text_lines(), vec!["Hello", "a | b"]);
    /// ```
    pub fn text_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        for block in self.header.iter().chain(self.body.iter()) {
            block.collect_lines(&mut out);
        }
        if let Some(footer) = &self.footer {
            out.push(footer.content.clone());
        }
        out
    }

    /// Number of images anywhere in the layout.
    pub fn image_count(&self) -> usize {
        fn count(blocks: &[Block]) -> usize {
            blocks
                .iter()
                .map(|block| match block {
                    Block::Image(_) => 1,
                    Block::Columns { columns, .. } => columns.iter().map(|c| count(&c.blocks)).sum(),
                    _ => 0,
                })
                .sum()
        }
        count(&self.header) + count(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_builder() {
        let text = Text::new("Title").bold().size(16.0).centered().underlined();
        assert_eq!(text.style, TextStyle::Bold);
        assert_eq!(text.size, 16.0);
        assert_eq!(text.align, Align::Center);
        assert!(text.underline);
    }

    #[test]
    fn test_cell_span_is_at_least_one() {
        assert_eq!(Cell::new("x").span(0).span, 1);
        assert_eq!(Cell::new("x").span(3).span, 3);
    }

    #[test]
    fn test_text_lines_order() {
        let layout = Layout {
            header: vec![Block::text("Header line 1\nHeader line 2")],
            body: vec![
                Block::field("Name: ", "Asha"),
                Block::Spacer(10.0),
                Block::Columns {
                    columns: vec![
                        Column::new(1.0, vec![Block::text("left")]),
                        Column::new(1.0, vec![Block::text("right")]),
                    ],
                    boxed: true,
                },
                Block::PageBreak,
            ],
            footer: Some(Text::new("footer")),
        };

        assert_eq!(
            layout.text_lines(),
            vec!["Header line 1", "Header line 2", "Name: Asha", "left", "right", "footer"]
        );
    }

    #[test]
    fn test_image_count_includes_nested_columns() {
        let image = Block::Image(Image {
            bytes: vec![1],
            width: 10.0,
            max_height: None,
            align: Align::Left,
        });
        let layout = Layout {
            header: vec![image.clone()],
            body: vec![Block::Columns {
                columns: vec![Column::new(1.0, vec![image])],
                boxed: false,
            }],
            footer: None,
        };
        assert_eq!(layout.image_count(), 2);
    }
}
