//! Stand-in trees for widgets whose data is missing or misconfigured.

use display_components::prelude::*;
use display_layout::style::{Align, Justify};

/// Largest placeholder glyph.
pub const PLACEHOLDER_ICON_MAX: u32 = 48;

/// Muted icon over a short message, centered in the slot.
pub fn placeholder(ctx: &RenderContext, icon: IconKind, message: &str) -> Component {
    let muted = ctx.token(ThemeToken::TextSecondary);
    Stack::column()
        .gap(8)
        .align(Align::Center)
        .justify(Justify::Center)
        .child(Icon::fit(icon, PLACEHOLDER_ICON_MAX).color(muted))
        .child(Label::new(message).font(FontRole::Small).color(muted))
        .into()
}

/// Slot content for a widget that failed validation.
pub fn config_error(_ctx: &RenderContext) -> Component {
    Stack::column()
        .gap(8)
        .align(Align::Center)
        .justify(Justify::Center)
        .child(Icon::fit(IconKind::Alert, PLACEHOLDER_ICON_MAX).color(palette::RED))
        .child(Label::new("Config Error").font(FontRole::Small).color(palette::RED))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_icon_and_text() {
        let tree = placeholder(&RenderContext::default(), IconKind::Music, "No Media");
        let Component::Stack(stack) = tree else {
            panic!("placeholder should be a stack");
        };
        assert!(matches!(stack.children(), [Component::Icon(_), Component::Label(l)] if l.text() == "No Media"));
    }

    #[test]
    fn test_config_error_text() {
        let Component::Stack(stack) = config_error(&RenderContext::default()) else {
            panic!("config error should be a stack");
        };
        assert!(matches!(stack.children().get(1), Some(Component::Label(l)) if l.text() == "Config Error"));
    }
}
