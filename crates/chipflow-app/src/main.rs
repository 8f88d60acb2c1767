//! chipflow command-line host.
//!
//! Loads a layout description (TOML or JSON), packs it, and prints the
//! placements as JSON. With `--query`, prints only the headers and chips
//! that intersect the given region, the way a scrolling host asks for the
//! visible set.

mod args;
mod report;

use anyhow::Result;

use args::Args;
use chipflow_layout::FlowPacker;
use chipflow_types::LayoutDescription;
use report::Report;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = Args::parse(std::env::args().skip(1))? else {
        println!("{}", args::USAGE);
        return Ok(());
    };
    let desc = LayoutDescription::from_path(&args.layout)?;
    let width = args.width.unwrap_or(desc.content_width);
    log::info!(
        "Packing {} ({} sections, {} items) at width {width}",
        args.layout.display(),
        desc.sections.len(),
        desc.item_count(),
    );

    let mut packer = FlowPacker::new();
    let result = packer.pack(&desc, width)?;
    log::info!("Content height: {}", result.content_height());

    let report = Report::new(result, args.query);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
