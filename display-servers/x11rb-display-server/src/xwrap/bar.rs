//! Title bars drawn with the core `fixed` font.
use helium_core::Config;
use x11rb::{connection::Connection, protocol::xproto, rust_connection::RustConnection};

use super::{Colors, XWrap};
use crate::error::Result;

const FONT: &str = "fixed";

/// What was last drawn into a bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BarContent {
    pub decoration: xproto::Window,
    pub focused: bool,
    pub title: Option<String>,
    pub width: i32,
}

pub(crate) struct BarStyle {
    focused_gc: xproto::Gcontext,
    unfocused_gc: xproto::Gcontext,
    focused_pixel: u32,
    unfocused_pixel: u32,
    char_width: i32,
    ascent: i32,
    descent: i32,
    bar_height: i32,
    center_title: bool,
    title_offset: i32,
}

impl BarStyle {
    pub(crate) fn new(
        conn: &RustConnection,
        root: xproto::Window,
        colors: &Colors,
        config: &impl Config,
    ) -> Result<Self> {
        let font = conn.generate_id()?;
        xproto::open_font(conn, font, FONT.as_bytes())?.check()?;
        let metrics = xproto::query_font(conn, font)?.reply()?;

        let focused_gc = create_text_gc(conn, root, font, colors.title, colors.focused)?;
        let unfocused_gc = create_text_gc(conn, root, font, colors.title, colors.unfocused)?;
        // The GCs keep the font alive.
        xproto::close_font(conn, font)?;

        Ok(Self {
            focused_gc,
            unfocused_gc,
            focused_pixel: colors.focused,
            unfocused_pixel: colors.unfocused,
            char_width: metrics.max_bounds.character_width.into(),
            ascent: metrics.font_ascent.into(),
            descent: metrics.font_descent.into(),
            bar_height: config.bar_height(),
            center_title: config.center_title(),
            title_offset: config.title_offset(),
        })
    }

    /// Where the title starts, centred or at the configured offset.
    fn title_x(&self, title_len: usize, width: i32) -> i32 {
        if !self.center_title {
            return self.title_offset;
        }
        let text_width = i32::try_from(title_len)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.char_width);
        ((width - text_width) / 2).max(0)
    }

    /// Baseline that centres the text vertically.
    fn title_y(&self) -> i32 {
        (self.bar_height + self.ascent - self.descent) / 2
    }
}

fn create_text_gc(
    conn: &RustConnection,
    root: xproto::Window,
    font: xproto::Font,
    foreground: u32,
    background: u32,
) -> Result<xproto::Gcontext> {
    let gc = conn.generate_id()?;
    let aux = xproto::CreateGCAux::new()
        .font(font)
        .foreground(foreground)
        .background(background)
        .graphics_exposures(0);
    xproto::create_gc(conn, gc, root, &aux)?;
    Ok(gc)
}

impl XWrap {
    /// Redraws a bar and remembers the content for later exposes.
    pub fn render_bar(
        &mut self,
        bar: xproto::Window,
        focused: bool,
        title: Option<String>,
        width: i32,
    ) -> Result<()> {
        let Some(content) = self.bars.get_mut(&bar) else {
            tracing::debug!("Ignoring render of unknown bar {}", bar);
            return Ok(());
        };
        content.focused = focused;
        content.title = title;
        content.width = width;
        let content = content.clone();
        self.draw_bar(bar, &content)
    }

    /// Redraws a bar from what it showed last.
    pub fn redraw_bar(&self, bar: xproto::Window) -> Result<()> {
        match self.bars.get(&bar) {
            Some(content) => self.draw_bar(bar, content),
            None => Ok(()),
        }
    }

    fn draw_bar(&self, bar: xproto::Window, content: &BarContent) -> Result<()> {
        let style = &self.bar_style;
        let (gc, pixel) = if content.focused {
            (style.focused_gc, style.focused_pixel)
        } else {
            (style.unfocused_gc, style.unfocused_pixel)
        };
        let attrs = xproto::ChangeWindowAttributesAux::new().background_pixel(pixel);
        xproto::change_window_attributes(&self.conn, bar, &attrs)?;
        xproto::clear_area(&self.conn, false, bar, 0, 0, 0, 0)?;

        let Some(title) = content.title.as_deref() else {
            return Ok(());
        };
        // `ImageText8` takes at most 255 bytes.
        let text: Vec<u8> = title.bytes().take(255).collect();
        let x = style.title_x(text.len(), content.width);
        xproto::image_text8(
            &self.conn,
            bar,
            gc,
            i16::try_from(x)?,
            i16::try_from(style.title_y())?,
            &text,
        )?;
        Ok(())
    }
}
