//! Wire models for the AutoCare account and booking backends.
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
