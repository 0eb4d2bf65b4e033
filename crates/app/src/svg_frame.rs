use knot_saver_core::{DrawCommand, HelpEntry, Rgba, Viewport};
use svg::node::element::{Circle, Line, Rectangle, Text as SvgText};
use svg::Document;

const BACKGROUND: Rgba = Rgba::BLACK;
const HELP_BACKGROUND: Rgba = Rgba::rgb(50, 50, 50);
const HELP_BORDER: Rgba = Rgba::rgb(255, 50, 50);
const HELP_TEXT: Rgba = Rgba::rgb(128, 128, 255);

/// Turns one recorded frame into an SVG document the size of the viewport.
pub fn render(
    viewport: Viewport,
    commands: &[DrawCommand],
    help: Option<&[HelpEntry]>,
) -> Document {
    let document = Document::new()
        .set("viewBox", (0, 0, viewport.width, viewport.height))
        .set("width", viewport.width)
        .set("height", viewport.height)
        .add(background(viewport, BACKGROUND));

    let document = commands
        .iter()
        .fold(document, |document, command| match *command {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => document.add(
                Circle::new()
                    .set("cx", center.0)
                    .set("cy", center.1)
                    .set("r", radius)
                    .set("fill", color.to_hex()),
            ),
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => document.add(
                Line::new()
                    .set("x1", from.0)
                    .set("y1", from.1)
                    .set("x2", to.0)
                    .set("y2", to.1)
                    .set("stroke", color.to_hex())
                    .set("stroke-width", width),
            ),
        });

    match help {
        Some(entries) => overlay_help(document, viewport, entries),
        None => document,
    }
}

fn background(viewport: Viewport, color: Rgba) -> Rectangle {
    Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", viewport.width)
        .set("height", viewport.height)
        .set("fill", color.to_hex())
}

fn overlay_help(document: Document, viewport: Viewport, entries: &[HelpEntry]) -> Document {
    let document = document.add(
        background(viewport, HELP_BACKGROUND)
            .set("stroke", HELP_BORDER.to_hex())
            .set("stroke-width", 5),
    );

    entries
        .iter()
        .enumerate()
        .fold(document, |document, (row, entry)| {
            let y = 100 + 30 * row as i32;
            document
                .add(label(entry.key.as_str(), 100, y, "courier"))
                .add(label(entry.description.as_str(), 200, y, "serif"))
        })
}

fn label(text: &str, x: i32, y: i32, family: &str) -> SvgText {
    SvgText::new(text)
        .set("x", x)
        .set("y", y)
        .set("font-family", family)
        .set("font-size", 24)
        .set("fill", HELP_TEXT.to_hex())
}
