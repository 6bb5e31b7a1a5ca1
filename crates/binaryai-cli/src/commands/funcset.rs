use std::path::Path;

use binaryai_client::{create_function_set, query_function_set, Client};
use binaryai_core::FunctionSetId;

use crate::types::FuncsetCreatedJson;
use crate::util::{load_config, to_sorted_pretty};

pub(crate) fn cmd_create_funcset(name: &str, cfg: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(cfg)?;
    let client = Client::from_config(&config);
    let id = create_function_set(&client, name)?;
    let out = FuncsetCreatedJson {
        funcsetid: id.as_str(),
    };
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}

pub(crate) fn cmd_query_funcset(funcset: &str, cfg: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(cfg)?;
    let client = Client::from_config(&config);
    let set = query_function_set(&client, &FunctionSetId::new(funcset))?;
    println!("{}", to_sorted_pretty(set)?);
    Ok(())
}
