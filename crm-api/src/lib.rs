#![feature(coverage_attribute)]

pub mod common;
pub mod constant;
pub mod user;
