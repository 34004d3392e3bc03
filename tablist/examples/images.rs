use std::fs::File;
use std::io;

use simplelog::{Config, LevelFilter, WriteLogger};
use tablist::{render_lines, TabDescriptor, TabFormat, TabList, TabListOptions};

/// The image-list variant: same component, image-aware format hooks.
fn main() -> io::Result<()> {
    let log_file = File::create("images.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut list = TabList::new(
        TabListOptions::new()
            .viewport_width(60)
            .format(TabFormat::image_list())
            .tab(
                TabDescriptor::new("Shakemap Intensity")
                    .data("thumbnail-title", "Shakemap")
                    .data("image", "shakemap_intensity.jpg")
                    .data("alt", "Shaking intensity contours"),
            )
            .tab(
                TabDescriptor::new("Did You Feel It?")
                    .data("thumbnail-title", "DYFI")
                    .data("image", "dyfi_responses.jpg")
                    .data("alt", "Community intensity map")
                    .data("footer", "Responses aggregated by ZIP code"),
            )
            .tab(
                TabDescriptor::new("PAGER Losses")
                    .data("thumbnail-title", "PAGER")
                    .data("image", "pager_alert.png")
                    .data("attr:usemap", "#alertmap"),
            ),
    );

    for _ in 0..list.len() {
        for line in render_lines(&list) {
            println!("{line}");
        }
        println!();
        list.select_next();
    }

    Ok(())
}
