//! Binary crate for the aapkit tools: the argument surfaces, terminal
//! output, and run loops behind `aap-inventory` and
//! `aap-playbook-update`.

pub mod commands;
pub mod terminal;
