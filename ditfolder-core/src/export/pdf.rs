// ============================================================================
// ditfolder-core/src/export/pdf.rs
// ============================================================================
//
// DOCUMENT REPORT: Folder structure laid out on US Letter pages
//
// Layout, top to bottom:
// - "DIT Folder Structure Report" in Helvetica-Bold 16
// - the project info block, one Helvetica 10 line per field
// - a "Folder Structure:" heading in Helvetica-Bold 16
// - one Courier 9 line per snapshot node
//
// Tree guides and folder/file icons are drawn as vector strokes on the same
// monospace grid the terminal preview uses, since the built-in PDF fonts
// have no box-drawing or emoji glyphs. Text is encoded as WinAnsi; any
// character outside Latin-1 is written as '?'.
//
// Every line, header block included, is checked against the bottom margin.
// Under Overflow::Truncate nothing more is placed once a line does not fit.
// Under Overflow::Paginate placement continues at the top of a new page.

use std::path::Path;

use log::info;
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::CoreResult;
use crate::naming::ProjectInfo;
use crate::scanner::TreeNode;
use crate::temp_files::write_atomic;
use crate::tree_guide::{ICON_CELLS, SEGMENT_CELLS};

pub const REPORT_TITLE: &str = "DIT Folder Structure Report";
pub const STRUCTURE_HEADING: &str = "Folder Structure:";

const HEADING_SIZE: f32 = 16.0;
const INFO_SIZE: f32 = 10.0;
const TREE_SIZE: f32 = 9.0;
const LEADING: f32 = 1.2;
const TREE_GAP: f32 = 2.0;

/// Courier advance width as a fraction of the font size.
const MONO_ADVANCE: f32 = 0.6;

/// What happens to tree lines that reach the bottom margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    /// Drop the remaining lines; the report is always one page.
    #[default]
    Truncate,
    /// Continue on additional pages.
    Paginate,
}

/// Page geometry in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub overflow: Overflow,
}

impl Default for DocumentLayout {
    /// US Letter with 50 pt margins, truncating.
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 50.0,
            overflow: Overflow::Truncate,
        }
    }
}

impl DocumentLayout {
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Bold,
    Regular,
    Mono,
}

impl Font {
    const ALL: [Font; 3] = [Font::Bold, Font::Regular, Font::Mono];

    fn resource_name(self) -> Name<'static> {
        match self {
            Font::Bold => Name(b"F1"),
            Font::Regular => Name(b"F2"),
            Font::Mono => Name(b"F3"),
        }
    }

    fn base_font(self) -> Name<'static> {
        match self {
            Font::Bold => Name(b"Helvetica-Bold"),
            Font::Regular => Name(b"Helvetica"),
            Font::Mono => Name(b"Courier"),
        }
    }
}

/// Guide and icon drawn before a tree line's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Guide {
    level: usize,
    is_directory: bool,
}

impl Guide {
    /// Cells from the line's left edge to its text: prefix, icon, one space.
    fn text_cells(self) -> usize {
        self.level * SEGMENT_CELLS + ICON_CELLS + 1
    }
}

/// A line of text with its baseline position.
#[derive(Debug, Clone, PartialEq)]
struct PlacedLine {
    font: Font,
    size: f32,
    x: f32,
    y: f32,
    text: String,
    guide: Option<Guide>,
}

impl PlacedLine {
    fn cell(&self) -> f32 {
        self.size * MONO_ADVANCE
    }

    fn text_x(&self) -> f32 {
        match self.guide {
            Some(guide) => self.x + guide.text_cells() as f32 * self.cell(),
            None => self.x,
        }
    }
}

type Stroke = ((f32, f32), (f32, f32));

fn tree_pitch() -> f32 {
    TREE_SIZE * LEADING + TREE_GAP
}

/// Guide strokes for a tree row: a full-height bar per continuation
/// segment, then a corner running from the row top to mid-height and
/// across to the end of its third cell.
fn guide_strokes(level: usize, x: f32, baseline: f32, size: f32, pitch: f32) -> Vec<Stroke> {
    if level == 0 {
        return Vec::new();
    }
    let cell = size * MONO_ADVANCE;
    let segment = cell * SEGMENT_CELLS as f32;
    let mid = baseline + size * 0.3;
    let top = mid + pitch / 2.0;
    let bottom = mid - pitch / 2.0;

    let mut strokes: Vec<Stroke> = (0..level - 1)
        .map(|i| {
            let bar = x + i as f32 * segment + cell / 2.0;
            ((bar, bottom), (bar, top))
        })
        .collect();

    let corner_start = x + (level - 1) as f32 * segment;
    let bar = corner_start + cell / 2.0;
    strokes.push(((bar, top), (bar, mid)));
    strokes.push(((bar, mid), (corner_start + 3.0 * cell, mid)));
    strokes
}

fn draw_guide(content: &mut Content, line: &PlacedLine, guide: Guide) {
    let strokes = guide_strokes(guide.level, line.x, line.y, line.size, tree_pitch());
    if !strokes.is_empty() {
        for ((x1, y1), (x2, y2)) in strokes {
            content.move_to(x1, y1);
            content.line_to(x2, y2);
        }
        content.stroke();
    }

    let cell = line.cell();
    let left = line.x + (guide.level * SEGMENT_CELLS) as f32 * cell;
    let width = ICON_CELLS as f32 * cell;
    let (baseline, size) = (line.y, line.size);
    if guide.is_directory {
        content.set_fill_rgb(0.96, 0.76, 0.28);
        content.rect(left + 0.1 * width, baseline, 0.8 * width, 0.6 * size);
        content.rect(left + 0.1 * width, baseline + 0.6 * size, 0.35 * width, 0.12 * size);
        content.fill_nonzero();
    } else {
        content.set_fill_gray(1.0);
        content.rect(left + 0.2 * width, baseline - 0.05 * size, 0.6 * width, 0.8 * size);
        content.fill_nonzero_and_stroke();
    }
}

/// Places lines top to bottom, opening pages or stopping as the overflow
/// policy says.
struct PageCursor<'a> {
    layout: &'a DocumentLayout,
    pages: Vec<Vec<PlacedLine>>,
    y: f32,
    full: bool,
}

impl<'a> PageCursor<'a> {
    fn new(layout: &'a DocumentLayout) -> Self {
        Self {
            layout,
            pages: vec![Vec::new()],
            y: layout.page_height - layout.margin,
            full: false,
        }
    }

    /// Places a line and moves down by `advance`. Returns false once a
    /// truncated page is full.
    fn place(&mut self, font: Font, size: f32, advance: f32, text: String, guide: Option<Guide>) -> bool {
        if self.full {
            return false;
        }
        if self.y - size * LEADING < self.layout.margin {
            match self.layout.overflow {
                Overflow::Truncate => {
                    self.full = true;
                    return false;
                }
                Overflow::Paginate => {
                    self.pages.push(Vec::new());
                    self.y = self.layout.page_height - self.layout.margin;
                }
            }
        }
        let line = PlacedLine {
            font,
            size,
            x: self.layout.margin,
            y: self.y - size,
            text,
            guide,
        };
        if let Some(page) = self.pages.last_mut() {
            page.push(line);
        }
        self.y -= advance;
        true
    }

    fn skip(&mut self, gap: f32) {
        self.y -= gap;
    }
}

/// Positions every line, splitting into pages as `layout.overflow` says.
fn layout_pages(nodes: &[TreeNode], info: &ProjectInfo, layout: &DocumentLayout) -> Vec<Vec<PlacedLine>> {
    let mut cursor = PageCursor::new(layout);

    cursor.place(Font::Bold, HEADING_SIZE, HEADING_SIZE * LEADING + 20.0, REPORT_TITLE.to_string(), None);
    for line in info.lines() {
        cursor.place(Font::Regular, INFO_SIZE, INFO_SIZE * LEADING + 5.0, line.clone(), None);
    }
    cursor.skip(20.0);
    cursor.place(Font::Bold, HEADING_SIZE, HEADING_SIZE * LEADING + 15.0, STRUCTURE_HEADING.to_string(), None);

    for node in nodes {
        let guide = Guide {
            level: node.level,
            is_directory: node.is_directory,
        };
        let text = format!("{} ({})", node.name, node.size);
        if !cursor.place(Font::Mono, TREE_SIZE, tree_pitch(), text, Some(guide)) {
            break;
        }
    }

    cursor.pages
}

/// Number of pages [`render_pdf`] would produce.
#[must_use]
pub fn page_count(nodes: &[TreeNode], info: &ProjectInfo, layout: &DocumentLayout) -> usize {
    layout_pages(nodes, info, layout).len()
}

/// Latin-1 bytes for a built-in font; anything else becomes '?'.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(byte) if !c.is_control() => byte,
            _ => b'?',
        })
        .collect()
}

/// Renders the report as PDF bytes.
#[must_use]
pub fn render_pdf(nodes: &[TreeNode], info: &ProjectInfo, layout: &DocumentLayout) -> Vec<u8> {
    let pages = layout_pages(nodes, info, layout);

    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let tree_id = alloc.bump();
    let info_id = alloc.bump();
    let font_ids: Vec<Ref> = Font::ALL.iter().map(|_| alloc.bump()).collect();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc.bump(), alloc.bump())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);
    pdf.document_info(info_id)
        .title(TextStr(REPORT_TITLE))
        .producer(TextStr("ditfolder"));

    for (font, id) in Font::ALL.iter().zip(&font_ids) {
        pdf.type1_font(*id)
            .base_font(font.base_font())
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for (lines, (page_id, content_id)) in pages.iter().zip(&page_ids) {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, layout.page_width, layout.page_height));
        page.parent(tree_id);
        page.contents(*content_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (font, id) in Font::ALL.iter().zip(&font_ids) {
                fonts.pair(font.resource_name(), *id);
            }
        }
        page.finish();

        let mut content = Content::new();
        content.save_state();
        content.set_line_width(0.6);
        content.set_stroke_gray(0.35);
        for line in lines {
            if let Some(guide) = line.guide {
                draw_guide(&mut content, line, guide);
            }
        }
        content.restore_state();

        for line in lines {
            content.begin_text();
            content.set_font(line.font.resource_name(), line.size);
            content.next_line(line.text_x(), line.y);
            content.show(Str(&encode_win_ansi(&line.text)));
            content.end_text();
        }
        pdf.stream(*content_id, &content.finish());
    }

    pdf.finish()
}

/// Renders the report and writes it to `dest`.
pub fn write_pdf(
    nodes: &[TreeNode],
    info: &ProjectInfo,
    layout: &DocumentLayout,
    dest: &Path,
) -> CoreResult<()> {
    let pages = page_count(nodes, info, layout);
    write_atomic(dest, &render_pdf(nodes, info, layout))?;
    info!("Exported PDF report ({} page(s)) to {}", pages, dest.display());
    Ok(())
}
