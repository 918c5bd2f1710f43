use std::fs::File;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use tablehead::{
    document_size, Color, Document, Element, MirrorSet, Style, Terminal, Viewport, ViewportEvent,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("pinned.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    let mut viewport = Viewport::new(width, height);

    let mut doc = build_document();
    let mut mirrors = MirrorSet::new();
    mirrors
        .attach_all(&mut doc, ["regions", "services"])
        .expect("tables exist in the document we just built");

    loop {
        let layout = term.draw(&doc, &viewport)?;
        let content = document_size(&doc, &layout);

        for raw in term.poll(None)? {
            if let Some(event) = ViewportEvent::from_crossterm(&raw) {
                match event {
                    ViewportEvent::Resize { width, height } => {
                        viewport.resize(width, height);
                        mirrors.dispatch(&mut doc, &viewport, event);
                    }
                    ViewportEvent::Scroll { delta_x, delta_y } => {
                        if viewport.scroll_by(delta_x, delta_y, content) {
                            mirrors.dispatch(&mut doc, &viewport, event);
                        }
                    }
                }
                continue;
            }

            let CrosstermEvent::Key(key) = raw else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let page = viewport.height.saturating_sub(1) as i16;
            let scroll = match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => Some((0, -1)),
                KeyCode::Down | KeyCode::Char('j') => Some((0, 1)),
                KeyCode::Left | KeyCode::Char('h') => Some((-2, 0)),
                KeyCode::Right | KeyCode::Char('l') => Some((2, 0)),
                KeyCode::PageUp => Some((0, -page)),
                KeyCode::PageDown => Some((0, page)),
                _ => None,
            };

            if let Some((dx, dy)) = scroll {
                if viewport.scroll_by(dx, dy, content) {
                    mirrors.dispatch(
                        &mut doc,
                        &viewport,
                        ViewportEvent::Scroll {
                            delta_x: dx,
                            delta_y: dy,
                        },
                    );
                }
            }
        }
    }
}

fn build_document() -> Document {
    let mut doc = Document::new();

    doc.push(
        Element::text("Pinned headers - scroll with wheel/arrows/PgUp/PgDn, q quits")
            .style(Style::new().bold()),
    );
    doc.push(Element::text(""));
    doc.push(Element::text("Scroll down into a table and its header stays in view."));
    doc.push(Element::text(""));

    doc.push(regions_table());

    for _ in 0..4 {
        doc.push(Element::text(""));
    }
    doc.push(Element::text("A second table, with its own mirror:"));
    doc.push(Element::text(""));

    doc.push(services_table());

    doc.push(Element::text(""));
    doc.push(Element::text("--- end of document ---"));

    doc
}

fn regions_table() -> Element {
    let header_style = Style::new().background(Color::oklch(0.35, 0.08, 250.0));
    Element::table()
        .id("regions")
        .child(
            Element::thead().child(
                Element::row().children(
                    ["Region", "Q1", "Q2", "Q3", "Q4", "Total"]
                        .into_iter()
                        .map(|label| Element::th(label).style(header_style.clone())),
                ),
            ),
        )
        .child(
            Element::tbody().children((1..=30).map(|i| {
                Element::row()
                    .child(Element::td(format!("Region {i}")))
                    .child(Element::td(format!("{}", i * 100)))
                    .child(Element::td(format!("{}", i * 110)))
                    .child(Element::td(format!("{}", i * 95)))
                    .child(Element::td(format!("{}", i * 120)))
                    .child(Element::td(format!("{}", i * 425)))
            })),
        )
}

fn services_table() -> Element {
    let header_style = Style::new().background(Color::oklch(0.35, 0.08, 140.0));
    let statuses = ["ok", "ok", "degraded", "ok", "down"];
    Element::table()
        .id("services")
        .child(
            Element::thead().child(
                Element::row().children(
                    ["Service", "Status", "Latency (ms)"]
                        .into_iter()
                        .map(|label| Element::th(label).style(header_style.clone())),
                ),
            ),
        )
        .child(
            Element::tbody().children((1..=18usize).map(|i| {
                Element::row()
                    .child(Element::td(format!("service-{i:02}")))
                    .child(Element::td(statuses[i % statuses.len()]))
                    .child(Element::td(format!("{}", 20 + (i * 7) % 90)))
            })),
        )
}
