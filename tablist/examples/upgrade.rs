use std::fs::File;
use std::io;

use simplelog::{Config, LevelFilter, WriteLogger};
use tablist::{render_lines, upgrade_all, Element};

/// Auto-upgrade: static page markup in, live components out.
fn main() -> io::Result<()> {
    let log_file = File::create("upgrade.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut page = Element::section()
        .id("page")
        .child(Element::text("Static page with one upgradeable container"))
        .child(
            Element::section()
                .class("tablist")
                .child(
                    Element::section()
                        .class("panel")
                        .attr("data-title", "Summary")
                        .child(Element::text("A short event summary.")),
                )
                .child(
                    Element::section()
                        .class("panel")
                        .attr("data-title", "Details")
                        .attr("data-selected", "true")
                        .child(Element::header("Details"))
                        .child(Element::text("The full technical write-up.")),
                ),
        );

    let mut lists = upgrade_all(&mut page);
    println!("upgraded {} container(s)\n", lists.len());

    for list in &mut lists {
        for line in render_lines(list) {
            println!("{line}");
        }
        list.select_next();
        println!();
        for line in render_lines(list) {
            println!("{line}");
        }
    }

    Ok(())
}
