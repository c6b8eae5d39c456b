//! Now-playing widget for media players.

use display_components::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, WidgetConfig};
use crate::format::{duration, percent_of};
use crate::placeholder::placeholder;
use crate::state::{EntityView, WidgetState};

/// Player states with nothing to show.
const INACTIVE_STATES: [&str; 4] = ["idle", "off", "standby", "unavailable"];

/// Options for the `media` widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaOptions {
    /// Artist line.
    pub show_artist: bool,
    /// Album line.
    pub show_album: bool,
    /// Position bar with elapsed and total time.
    pub show_progress: bool,
}

impl Default for MediaOptions {
    fn default() -> Self {
        Self {
            show_artist: true,
            show_album: false,
            show_progress: true,
        }
    }
}

/// Title, artist, album and position of a media player.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaWidget {
    config: WidgetConfig,
    options: MediaOptions,
}

impl MediaWidget {
    /// Shown without a player entity.
    pub const NO_MEDIA: &'static str = "No Media";
    /// Shown for idle or powered-off players.
    pub const NOTHING_PLAYING: &'static str = "Nothing Playing";

    /// Validates the options.
    pub fn new(config: &WidgetConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            options: config.parse_options()?,
            config: config.clone(),
        })
    }

    /// Configuration this widget was built from.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Decoded options.
    pub fn options(&self) -> &MediaOptions {
        &self.options
    }

    /// Position bar values, when the player reports a usable duration.
    #[allow(clippy::cast_possible_truncation)]
    pub fn progress(entity: &EntityView) -> Option<MediaProgress> {
        let total = entity.number("media_duration").filter(|d| *d > 0.0)?;
        let elapsed = entity.number("media_position").unwrap_or(0.0).clamp(0.0, total);
        Some(MediaProgress {
            percent: percent_of(elapsed, 0.0, total) as f32,
            elapsed: duration(elapsed),
            total: duration(total),
        })
    }

    /// Card for an active player.
    pub fn display(&self, ctx: &RenderContext, entity: &EntityView) -> MediaDisplay {
        let title = entity.text("media_title").unwrap_or(entity.display_name());
        let mut display = MediaDisplay::new(title, entity.state == "playing").colors(
            self.config.color_or(palette::CYAN),
            ctx.token(ThemeToken::TextPrimary),
            ctx.token(ThemeToken::TextSecondary),
            ctx.token(ThemeToken::Track),
        );
        if self.options.show_artist {
            if let Some(artist) = entity.text("media_artist") {
                display = display.artist(artist);
            }
        }
        if self.options.show_album {
            if let Some(album) = entity.text("media_album_name") {
                display = display.album(album);
            }
        }
        if self.options.show_progress {
            if let Some(progress) = Self::progress(entity) {
                display = display.progress(progress);
            }
        }
        display
    }

    /// Builds the card, or a placeholder when nothing is playing.
    pub fn render(&self, ctx: &RenderContext, state: &WidgetState) -> Component {
        match &state.entity {
            None => placeholder(ctx, IconKind::Music, Self::NO_MEDIA),
            Some(entity) if INACTIVE_STATES.contains(&entity.state.as_str()) => {
                placeholder(ctx, IconKind::Music, Self::NOTHING_PLAYING)
            }
            Some(entity) => self.display(ctx, entity).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn state(entity: Option<EntityView>) -> WidgetState {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        WidgetState::new(now).with_entity(entity)
    }

    fn spotify(state: &str) -> EntityView {
        EntityView::new("media_player.spotify", state)
            .attribute("media_title", "Bohemian Rhapsody")
            .attribute("media_artist", "Queen")
            .attribute("media_album_name", "A Night at the Opera")
            .attribute("media_position", 125)
            .attribute("media_duration", 354)
    }

    #[test]
    fn test_playing_card() {
        let ctx = RenderContext::default();
        let widget = MediaWidget::new(&WidgetConfig::new("media", 0)).unwrap();
        let display = widget.display(&ctx, &spotify("playing"));
        assert!(display.is_playing());

        let progress = MediaWidget::progress(&spotify("playing")).unwrap();
        assert_eq!(progress.elapsed, "2:05");
        assert_eq!(progress.total, "5:54");
        assert!((progress.percent - 35.31).abs() < 0.01);

        let expected = MediaDisplay::new("Bohemian Rhapsody", true)
            .colors(palette::CYAN, palette::WHITE, palette::GRAY, palette::DARK_GRAY)
            .artist("Queen")
            .progress(progress);
        assert_eq!(display, expected);
    }

    #[test]
    fn test_paused_shows_album_when_enabled() {
        let ctx = RenderContext::default();
        let config = WidgetConfig::new("media", 0)
            .option("show_album", true)
            .option("show_progress", false);
        let display = MediaWidget::new(&config).unwrap().display(&ctx, &spotify("paused"));
        let expected = MediaDisplay::new("Bohemian Rhapsody", false)
            .colors(palette::CYAN, palette::WHITE, palette::GRAY, palette::DARK_GRAY)
            .artist("Queen")
            .album("A Night at the Opera");
        assert_eq!(display, expected);
    }

    #[test]
    fn test_no_duration_no_progress() {
        let entity = EntityView::new("media_player.tv", "playing").attribute("media_duration", 0);
        assert_eq!(MediaWidget::progress(&entity), None);
    }

    #[test]
    fn test_placeholders() {
        let ctx = RenderContext::default();
        let widget = MediaWidget::new(&WidgetConfig::new("media", 0)).unwrap();
        assert_eq!(
            widget.render(&ctx, &state(None)),
            placeholder(&ctx, IconKind::Music, "No Media")
        );
        for idle in INACTIVE_STATES {
            assert_eq!(
                widget.render(&ctx, &state(Some(spotify(idle)))),
                placeholder(&ctx, IconKind::Music, "Nothing Playing")
            );
        }
    }
}
