//! Function and function-set queries.

use serde_json::{json, Value};

use binaryai_core::{FunctionId, FunctionSetId};

use crate::client::Transport;
use crate::error::RemoteError;

const QUERY_FUNCTION: &str = r#"
query QueryFunction($funcId: ID!) {
  function(id: $funcId) {
    id
    name
    sourceCode
    sourceFile
    sourceLine
    binaryFile
    platform
  }
}
"#;

const CREATE_FUNCTION_SET: &str = r#"
mutation CreateFunctionSet($name: String!, $description: String, $functionIds: [ID!]) {
  createFunctionSet(input: {name: $name, description: $description, functionIds: $functionIds}) {
    functionSet {
      id
    }
  }
}
"#;

const QUERY_FUNCTION_SET: &str = r#"
query QueryFunctionSet($funcSetId: ID!) {
  functionSet(id: $funcSetId) {
    id
    name
    description
    functions {
      id
      name
    }
  }
}
"#;

/// Fetches a single function record. The record is returned as the service
/// sent it; its schema is not interpreted here.
pub fn query_function(client: &dyn Transport, id: &FunctionId) -> Result<Value, RemoteError> {
    let mut data = client.execute(QUERY_FUNCTION, json!({ "funcId": id.as_str() }))?;
    take_object(&mut data, "function", id.as_str())
}

/// Creates an empty, named function set and returns its id.
pub fn create_function_set(client: &dyn Transport, name: &str) -> Result<FunctionSetId, RemoteError> {
    let data = client.execute(CREATE_FUNCTION_SET, json!({ "name": name }))?;
    data.pointer("/createFunctionSet/functionSet/id")
        .and_then(Value::as_str)
        .map(FunctionSetId::from)
        .ok_or_else(|| RemoteError::MissingField("createFunctionSet.functionSet.id".to_string()))
}

pub fn query_function_set(client: &dyn Transport, id: &FunctionSetId) -> Result<Value, RemoteError> {
    let mut data = client.execute(QUERY_FUNCTION_SET, json!({ "funcSetId": id.as_str() }))?;
    take_object(&mut data, "functionSet", id.as_str())
}

fn take_object(data: &mut Value, field: &'static str, id: &str) -> Result<Value, RemoteError> {
    match data.get_mut(field).map(Value::take) {
        None => Err(RemoteError::MissingField(field.to_string())),
        Some(Value::Null) => Err(RemoteError::NotFound {
            kind: field,
            id: id.to_string(),
        }),
        Some(v) => Ok(v),
    }
}
