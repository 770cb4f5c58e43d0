//! Drawing a laid-out month onto a page.

use crate::calendar::layout::{CellContent, FontSpec, LayoutCell, MonthLayout};
use crate::calendar::palette::Palette;
use crate::error::Result;
use crate::graphics::Color;
use crate::page::Page;
use crate::text::cap_height;

/// Colours, line width and font resolved for a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub line_width: f64,
    pub font: FontSpec,
}

impl CellStyle {
    pub fn for_cell(layout: &MonthLayout, palette: &Palette, cell: &LayoutCell) -> Self {
        let (background, text) = if cell.is_title() {
            (palette.title_background, palette.title_text)
        } else {
            (palette.cell_background, palette.cell_text)
        };
        Self {
            background,
            text,
            border: palette.border,
            line_width: layout.line_width,
            font: layout.font_for(&cell.content),
        }
    }
}

/// Draws one cell. Implement this to change how cells look without touching
/// the layout or the file output.
pub trait CellRenderer {
    fn render_cell(&self, page: &mut Page, cell: &LayoutCell, style: &CellStyle) -> Result<()>;
}

/// Filled, outlined box with the label centred on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCellRenderer {
    /// Write `1st`, `2nd`, ... instead of bare numbers.
    pub ordinals: bool,
}

impl DefaultCellRenderer {
    pub fn new(ordinals: bool) -> Self {
        Self { ordinals }
    }

    pub fn label(&self, content: &CellContent) -> Option<String> {
        match content {
            CellContent::Title(title) => Some(title.clone()),
            CellContent::Weekday(label) => Some((*label).to_string()),
            CellContent::Day(day) => Some(day_label(*day, self.ordinals)),
            CellContent::Blank => None,
        }
    }
}

impl CellRenderer for DefaultCellRenderer {
    fn render_cell(&self, page: &mut Page, cell: &LayoutCell, style: &CellStyle) -> Result<()> {
        let rect = cell.rect;
        page.graphics()
            .set_fill_color(style.background)
            .set_stroke_color(style.border)
            .set_line_width(style.line_width)
            .rect(rect.x(), rect.y(), rect.width(), rect.height())
            .fill_stroke();

        if let Some(label) = self.label(&cell.content) {
            let center = rect.center();
            // Centre the capitals vertically; descenders hang below.
            let baseline = center.y - cap_height(style.font.font, style.font.size) / 2.0;
            page.text()
                .set_font(style.font.font, style.font.size)
                .set_fill_color(style.text)
                .write_centered(&label, center.x, baseline)?;
        }

        Ok(())
    }
}

/// Text printed in a day cell.
pub fn day_label(day: u32, ordinals: bool) -> String {
    if ordinals {
        format!("{day}{}", ordinal_suffix(day))
    } else {
        day.to_string()
    }
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Renders every cell of `layout` onto a fresh page of the layout's size.
pub fn render_month(
    layout: &MonthLayout,
    palette: &Palette,
    renderer: &dyn CellRenderer,
) -> Result<Page> {
    let mut page = Page::new(layout.page_width, layout.page_height);
    for cell in layout.cells() {
        let style = CellStyle::for_cell(layout, palette, cell);
        renderer.render_cell(&mut page, cell, &style)?;
    }
    Ok(page)
}
