use std::fs::{self, File};
use std::io::{BufWriter, Write};

use anyhow::Context;
use cardex_core::config::load_config;
use cardex_rfc::rfc::vcard::Encoder;
use cardex_service::export::export_cards;
use cardex_service::people::{GroupDirectory, parse_groups, parse_people};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let export = &config.export;

    let groups_json = fs::read_to_string(&export.groups_path)
        .with_context(|| format!("Unable to read contact groups from {}", export.groups_path))?;
    let groups = GroupDirectory::from_groups(
        parse_groups(&groups_json).context("Unable to parse contact groups")?,
    );

    let people_json = fs::read_to_string(&export.people_path)
        .with_context(|| format!("Unable to read people from {}", export.people_path))?;
    let people = parse_people(&people_json).context("Unable to parse people")?;

    tracing::info!(records = people.len(), "Loaded people records");

    let file = File::create(&export.output_path)
        .with_context(|| format!("Unable to create {}", export.output_path))?;
    let mut encoder = Encoder::new(BufWriter::new(file));

    let summary = export_cards(&people, &groups, &mut encoder);

    encoder
        .into_inner()
        .flush()
        .with_context(|| format!("Unable to flush {}", export.output_path))?;

    tracing::info!(exported = summary.exported, path = %export.output_path, "Wrote cards");

    Ok(())
}
