#![allow(dead_code)]

mod fake_uploader;
mod harness;

pub use fake_uploader::*;
pub use harness::*;
