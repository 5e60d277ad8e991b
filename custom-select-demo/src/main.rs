use std::error::Error;
use std::fs::File;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use custom_select::overlay::class;
use custom_select::{Config, CustomSelect, Target};
use selectdom::{
    Document, DomError, Element, Line, ROOT_ID, Row, Terminal, hit_test, render_lines,
};
use simplelog::{LevelFilter, WriteLogger};

const HOSTS: &[&str] = &["color", "size", "broken"];

fn picker(id: &str, label: &str, options: Vec<Element>) -> Element {
    Element::div()
        .id(id)
        .class("custom-select")
        .child(Element::div().child(Element::text(label)))
        .child(Element::select().id(format!("{id}-native")).children(options))
}

fn document() -> Result<Document, DomError> {
    Document::with_body([
        Element::div().id("title").child(Element::text("custom-select demo")),
        picker(
            "color",
            "Color",
            vec![
                Element::option("red", "Red"),
                Element::option("green", "Green").selected(true),
                Element::option("blue", "Blue"),
            ],
        ),
        picker(
            "size",
            "Size",
            vec![
                Element::new("option")
                    .attr("value", "s")
                    .child(Element::new("b").child(Element::text("S")))
                    .child(Element::text("mall")),
                Element::option("m", "Medium (sold out)").disabled(true),
                Element::option("l", "Large"),
            ],
        ),
        Element::div()
            .id("broken")
            .class("custom-select")
            .child(Element::text("no native control here")),
        Element::div()
            .id("help")
            .child(Element::text("click to choose | d destroy | i init | q quit")),
    ])
}

fn rows(doc: &Document, select: &CustomSelect, lines: &[Line]) -> Vec<Row> {
    let mut rows: Vec<Row> = lines
        .iter()
        .map(|line| {
            Row::new(line.indented())
                .bold(doc.has_class(&line.id, class::PLACEHOLDER))
                .reverse(doc.has_class(&line.id, class::SELECTED))
                .dim(doc.has_class(&line.id, class::DISABLED))
        })
        .collect();

    rows.push(Row::default());
    for host in HOSTS {
        let native = format!("{host}-native");
        if !doc.exists(&native) {
            continue;
        }
        let value = doc.select_value(&native).unwrap_or_default();
        rows.push(Row::new(format!("{native} = {value:?}")).dim(true));
    }
    if let Some(report) = select.last_report() {
        for (host, err) in report.failures() {
            rows.push(Row::new(format!("{host}: {err}")).dim(true));
        }
    }
    rows
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut doc = document()?;
    let mut select = CustomSelect::new(
        &mut doc,
        Target::selector(".custom-select"),
        Config::default().after_init(|| log::info!("[demo] instance ready")),
    )?;

    let mut term = Terminal::new()?;
    loop {
        let lines = render_lines(&doc, ROOT_ID);
        term.draw(&rows(&doc, &select, &lines))?;

        for event in term.poll(Some(Duration::from_millis(250)))? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('d') => {
                        let n = select.destroy(&mut doc)?;
                        log::info!("[demo] destroyed {n} instances");
                    }
                    KeyCode::Char('i') => {
                        let report = select.init(&mut doc)?;
                        log::info!("[demo] init bound {:?}", report.initialized());
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    let MouseEventKind::Down(button @ MouseButton::Left) = mouse.kind else {
                        continue;
                    };
                    let target =
                        hit_test(&lines, 0, mouse.row).unwrap_or_else(|| ROOT_ID.to_string());
                    // rows from before an earlier event in this batch may be stale
                    match doc.dispatch(&target, button.into()) {
                        Ok(ran) => log::debug!("[demo] click on {target}: {ran} listeners"),
                        Err(e) => log::warn!("[demo] click on {target}: {e}"),
                    }
                }
                _ => {}
            }
        }
    }
}

fn main() {
    let log_file = File::create("custom-select-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
