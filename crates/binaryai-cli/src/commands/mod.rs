//! This module contains the implementation of the various subcommands for the `binaryai` tool.

pub(crate) mod batch;
pub(crate) mod funcset;
pub(crate) mod function;
pub(crate) mod install;
