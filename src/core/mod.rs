// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/mod.rs

pub mod collect;

pub use collect::{collect_constants, collect_functions, collect_variables, collect_variables_nested};
