//! The `options` command: master-data option lists for dropdown fields.

use std::sync::Arc;

use serde_json::json;

use crate::config::Config;
use crate::display::render_table;
use crate::error::Result;
use crate::remote::{RestClient, master_data};
use crate::types::EntityKind;

/// Show the server-maintained option list for one dropdown field.
pub async fn cmd_options(entity: EntityKind, field: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let client = Arc::new(RestClient::from_config(&config)?);
    let source = client.entity::<serde_json::Value>(entity);

    let options = master_data().get_or_fetch(&source, entity, field).await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&json!(&*options))?);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = options
        .iter()
        .map(|option| vec![option.value.to_string(), option.label.clone()])
        .collect();
    println!("{}", render_table(&["Value", "Label"], &rows));
    Ok(())
}
