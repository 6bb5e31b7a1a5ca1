use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct FuncsetCreatedJson<'a> {
    pub(crate) funcsetid: &'a str,
}
