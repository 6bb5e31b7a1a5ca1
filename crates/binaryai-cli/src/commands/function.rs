use serde_json::Value;
use std::path::Path;

use binaryai_client::{query_function, Client};
use binaryai_core::FunctionId;

use crate::util::{load_config, to_sorted_pretty};

/// Field carrying the decompiled source; too large to be useful on a terminal.
const SOURCE_CODE_KEY: &str = "sourceCode";

pub(crate) fn cmd_query_function(funcid: &str, cfg: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(cfg)?;
    let client = Client::from_config(&config);
    let function = query_function(&client, &FunctionId::new(funcid))?;
    println!("{}", render_function(function)?);
    Ok(())
}

pub(crate) fn render_function(mut function: Value) -> anyhow::Result<String> {
    if let Some(obj) = function.as_object_mut() {
        obj.remove(SOURCE_CODE_KEY);
    }
    to_sorted_pretty(function)
}
