use display_layout::geometry::Rect;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use super::{pct, px};
use crate::context::{Anchor, HAnchor, RenderContext, VAnchor};
use crate::font::FontRole;
use crate::gauge::Bar;
use crate::icon::IconKind;
use crate::surface::Surface;
use crate::theme::palette;

/// Playback position shown under the track info.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaProgress {
    /// Elapsed share of the track, `0..=100`.
    pub percent: f32,
    /// Elapsed time, e.g. `"1:05"`.
    pub elapsed: String,
    /// Track length, e.g. `"3:30"`.
    pub total: String,
}

/// Now-playing card: play state icon, title, artist, album and progress.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDisplay {
    title: String,
    artist: Option<String>,
    album: Option<String>,
    playing: bool,
    progress: Option<MediaProgress>,
    accent: Rgb888,
    primary: Rgb888,
    secondary: Rgb888,
    track: Rgb888,
}

impl MediaDisplay {
    /// Card for `title`.
    pub fn new(title: impl Into<String>, playing: bool) -> Self {
        Self {
            title: title.into(),
            artist: None,
            album: None,
            playing,
            progress: None,
            accent: palette::CYAN,
            primary: palette::WHITE,
            secondary: palette::GRAY,
            track: palette::DARK_GRAY,
        }
    }

    /// Artist line.
    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Album line.
    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Progress bar with elapsed and total time.
    pub fn progress(mut self, progress: MediaProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Accent (icon and bar), primary, secondary and track colors.
    pub fn colors(mut self, accent: Rgb888, primary: Rgb888, secondary: Rgb888, track: Rgb888) -> Self {
        self.accent = accent;
        self.primary = primary;
        self.secondary = secondary;
        self.track = track;
        self
    }

    /// Returns `true` when the play icon is shown.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Draws the card inside `rect`.
    pub fn draw<D>(&self, ctx: &RenderContext, surface: &mut Surface<'_, D>, rect: Rect) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let pad = pct(rect.width().min(rect.height()), 6);
        let inner = Rect::new(rect.x1 + pad, rect.y1 + pad, rect.x2 - pad, rect.y2 - pad);
        let (iw, cx) = (inner.width(), inner.center().x);
        let tiny = ctx.get_font(FontRole::Tiny);
        let tiny_h = i32::try_from(tiny.line_height()).unwrap_or(0);

        let progress_h = if self.progress.is_some() { 6 + 2 + tiny_h } else { 0 };
        let text_bottom = inner.y2 - if progress_h > 0 { progress_h + 4 } else { 0 };
        let text_h = (text_bottom - inner.y1).max(0);

        let icon = px(pct(iw.min(text_h), 25)).max(12);
        let icon_i = i32::try_from(icon).unwrap_or(0);
        let title_h = pct(text_h, 25);
        let artist_h = if self.artist.is_some() { pct(text_h, 15) } else { 0 };
        let album_h = if self.album.is_some() { pct(text_h, 12) } else { 0 };
        let group = icon_i + 4 + title_h + [artist_h, album_h].iter().filter(|h| **h > 0).map(|h| h + 2).sum::<i32>();
        let mut y = inner.y1 + ((text_h - group) / 2).max(0);

        let kind = if self.playing { IconKind::Play } else { IconKind::Pause };
        kind.draw(surface, Point::new(cx - icon_i / 2, y), icon, self.accent)?;
        y += icon_i + 4;

        let font = ctx.fit_text(&self.title, px(pct(iw, 95)), px(title_h), true);
        ctx.draw_text(surface, &self.title, Point::new(cx, y + title_h / 2), Anchor::CENTER, font, self.primary)?;
        y += title_h + 2;

        for (text, h, role) in [
            (self.artist.as_deref(), artist_h, FontRole::Regular),
            (self.album.as_deref(), album_h, FontRole::Small),
        ] {
            if let Some(text) = text {
                let font = ctx.fit_text_within(text, Size::new(px(iw), px(h)), ctx.get_font(role));
                ctx.draw_text(surface, text, Point::new(cx, y + h / 2), Anchor::CENTER, font, self.secondary)?;
                y += h + 2;
            }
        }

        if let Some(progress) = &self.progress {
            let bar_top = inner.y2 - progress_h;
            let bar = Rect::new(inner.x1, bar_top, inner.x2, bar_top + 6);
            Bar::new(progress.percent)
                .height(6)
                .colors(self.accent, self.track)
                .draw(ctx, surface, bar)?;
            let times_y = bar_top + 8;
            ctx.draw_text(surface, &progress.elapsed, Point::new(inner.x1, times_y), Anchor::LEFT_TOP, tiny, self.secondary)?;
            let total_anchor = Anchor::new(HAnchor::Right, VAnchor::Top);
            ctx.draw_text(surface, &progress.total, Point::new(inner.x2, times_y), total_anchor, tiny, self.secondary)?;
        }
        Ok(())
    }
}
