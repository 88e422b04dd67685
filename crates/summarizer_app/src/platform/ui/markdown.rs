use std::sync::OnceLock;

use ratatui::text::{Line, Span, Text};
use ratskin::RatSkin;

/// Lays out backend markdown as styled terminal lines. The source is passed
/// to the renderer unchanged.
pub fn render_markdown(source: &str, width: u16) -> Text<'static> {
    if source.is_empty() || width == 0 {
        return Text::default();
    }

    let lines = skin().parse(RatSkin::parse_text(source), width);
    Text::from(
        lines
            .into_iter()
            .map(|line| {
                Line::from(
                    line.spans
                        .into_iter()
                        .map(|span| Span::styled(span.content.into_owned(), span.style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>(),
    )
}

fn skin() -> &'static RatSkin {
    static SKIN: OnceLock<RatSkin> = OnceLock::new();
    SKIN.get_or_init(|| {
        let mut skin = RatSkin::default();
        skin.skin.paragraph.right_margin = 0;
        skin.skin.code_block.left_margin = 0;
        for header in &mut skin.skin.headers {
            header.left_margin = 0;
            header.right_margin = 0;
        }
        skin
    })
}
