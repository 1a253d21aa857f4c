//! Block: a bordered frame around arbitrary renderables.
//!
//! A block accepts any mix of renderables — cells, dividers, rows, tables,
//! or other blocks — purely through the [`Renderable`] contract. Children
//! that can stretch themselves are reflowed to the shared body width;
//! everything else is aligned into it. The body is framed with borders,
//! optional interior padding, and an optional title above and caption below.

use log::debug;

use crate::align::Align;
use crate::cell::{Cell, CellBuilder};
use crate::error::ConfigError;
use crate::renderable::Renderable;
use crate::text::{is_printable, repeated};

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// A finished bordered block.
///
/// Children are consumed at finish time: the block owns its rendered line
/// buffer outright and keeps no reference to what produced it.
#[derive(Debug, Clone)]
pub struct Block {
    width: usize,
    height: usize,
    lines: Vec<String>,
}

impl Block {
    /// Start configuring a new block.
    pub fn builder() -> BlockBuilder {
        BlockBuilder::new()
    }
}

impl Renderable for Block {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn lines(&self) -> &[String] {
        &self.lines
    }
}

// ---------------------------------------------------------------------------
// BlockBuilder
// ---------------------------------------------------------------------------

/// Staged configuration for a [`Block`].
pub struct BlockBuilder {
    children: Vec<Box<dyn Renderable>>,
    title: Option<Cell>,
    caption: Option<Cell>,
    align: Align,
    vertical_border: char,
    horizontal_border: char,
    filling_spacer: char,
    padding_spacer: char,
    vertical_padding: usize,
    horizontal_padding: usize,
    content_width: usize,
    content_height: usize,
}

impl BlockBuilder {
    /// A builder with no children, `'*'` borders, centered content, space
    /// spacers, and no padding.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            title: None,
            caption: None,
            align: Align::Center,
            vertical_border: '*',
            horizontal_border: '*',
            filling_spacer: ' ',
            padding_spacer: ' ',
            vertical_padding: 0,
            horizontal_padding: 0,
            content_width: 0,
            content_height: 0,
        }
    }

    /// Append one child to the body.
    pub fn content(mut self, child: impl Renderable + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append already-boxed children to the body, in order.
    pub fn contents<I: IntoIterator<Item = Box<dyn Renderable>>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    /// A cell spanning the full block width, rendered above the top border.
    pub fn title(mut self, title: Cell) -> Self {
        self.title = Some(title);
        self
    }

    /// A cell spanning the full block width, rendered below the bottom
    /// border.
    pub fn caption(mut self, caption: Cell) -> Self {
        self.caption = Some(caption);
        self
    }

    /// How children narrower than the body are placed within it.
    /// Default: [`Align::Center`].
    pub fn alignment(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// The west and east border character. Default: `'*'`.
    pub fn vertical_border(mut self, token: char) -> Self {
        self.vertical_border = token;
        self
    }

    /// The north and south border character. Default: `'*'`.
    pub fn horizontal_border(mut self, token: char) -> Self {
        self.horizontal_border = token;
        self
    }

    /// Empty rows and columns between the borders and the body.
    pub fn padding(mut self, vertical: usize, horizontal: usize) -> Self {
        self.vertical_padding = vertical;
        self.horizontal_padding = horizontal;
        self
    }

    /// The character filling padding rows and columns. Default: `' '`.
    pub fn padding_spacer(mut self, token: char) -> Self {
        self.padding_spacer = token;
        self
    }

    /// The character filling alignment slack around children. Default: `' '`.
    pub fn filling_spacer(mut self, token: char) -> Self {
        self.filling_spacer = token;
        self
    }

    /// Raise the body width floor. The body never shrinks below its widest
    /// child.
    pub fn content_width(mut self, columns: usize) -> Self {
        self.content_width = self.content_width.max(columns);
        self
    }

    /// Raise the body height floor; filler rows make up the difference when
    /// the children fall short.
    pub fn content_height(mut self, rows: usize) -> Self {
        self.content_height = self.content_height.max(rows);
        self
    }

    /// Drop the accumulated children and dimension floors, keeping title,
    /// caption, and formatting options.
    pub fn reset_contents(mut self) -> Self {
        self.children.clear();
        self.content_width = 0;
        self.content_height = 0;
        self
    }

    /// Validate the configuration and render the block.
    pub fn finish(self) -> Result<Block, ConfigError> {
        for (role, token) in [
            ("vertical border", self.vertical_border),
            ("horizontal border", self.horizontal_border),
            ("filling spacer", self.filling_spacer),
            ("padding spacer", self.padding_spacer),
        ] {
            if !is_printable(token) {
                return Err(ConfigError::UnprintableToken { role, token });
            }
        }
        if self.children.is_empty() {
            return Err(ConfigError::EmptyBlock);
        }
        if let Some(index) = self.children.iter().position(|child| child.width() == 0) {
            return Err(ConfigError::ZeroWidthChild { index });
        }

        let widest_child = self
            .children
            .iter()
            .map(|child| child.width())
            .max()
            .unwrap_or(0);
        let frame = 2 * (1 + self.horizontal_padding);
        let natural_body = self.content_width.max(widest_child);
        let width = [
            self.title.as_ref().map_or(0, Renderable::width),
            self.caption.as_ref().map_or(0, Renderable::width),
            natural_body + frame,
        ]
        .into_iter()
        .max()
        .unwrap_or(0);
        // The final width may have grown to fit the title or caption, so the
        // body width is re-derived from it.
        let body_width = width - frame;
        debug!("block body width: {body_width} (total {width})");

        let border_row = repeated(self.horizontal_border, width);
        let padding_row = format!(
            "{}{}{}",
            self.vertical_border,
            repeated(self.padding_spacer, width - 2),
            self.vertical_border
        );
        let horizontal_pad = repeated(self.padding_spacer, self.horizontal_padding);

        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.extend(stretch_banner(title, width)?);
        }

        lines.push(border_row.clone());
        for _ in 0..self.vertical_padding {
            lines.push(padding_row.clone());
        }

        let mut body_rows = 0usize;
        for child in &self.children {
            let child_lines = child
                .reflow(body_width)
                .unwrap_or_else(|| child.lines().to_vec());
            for line in &child_lines {
                let aligned = self.align.pad(line, body_width, self.filling_spacer);
                lines.push(format!(
                    "{0}{1}{2}{1}{0}",
                    self.vertical_border, horizontal_pad, aligned
                ));
            }
            body_rows += child_lines.len();
        }
        if self.content_height > body_rows {
            let filler = format!(
                "{0}{1}{2}{1}{0}",
                self.vertical_border,
                horizontal_pad,
                repeated(self.padding_spacer, body_width)
            );
            for _ in 0..self.content_height - body_rows {
                lines.push(filler.clone());
            }
        }

        for _ in 0..self.vertical_padding {
            lines.push(padding_row.clone());
        }
        lines.push(border_row);

        if let Some(caption) = &self.caption {
            lines.extend(stretch_banner(caption, width)?);
        }

        let height = lines.len();
        debug!("block dimensions: ({width}, {height})");

        Ok(Block {
            width,
            height,
            lines,
        })
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-render a title or caption cell at the full block width.
fn stretch_banner(cell: &Cell, width: usize) -> Result<Vec<String>, ConfigError> {
    Ok(CellBuilder::from(cell).width(width).finish()?.into_lines())
}

// ===========================================================================
// Tests
// ===========================================================================
