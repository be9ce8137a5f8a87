//! JSON test vector loader shared by policy/statement tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use base64::Engine;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub kind: String,
    pub input: InputData,
    #[serde(default)]
    pub expect: Option<serde_json::Value>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InputData {
    pub encoding: String,
    pub data: String,
}

impl InputData {
    pub fn decode(&self) -> Vec<u8> {
        match self.encoding.as_str() {
            "utf8" => self.data.as_bytes().to_vec(),
            "base64" => base64::engine::general_purpose::STANDARD
                .decode(&self.data)
                .expect("invalid base64 in test vector"),
            "hex" => hex::decode(&self.data).expect("invalid hex in test vector"),
            other => panic!("unsupported encoding: {other}"),
        }
    }
}

pub fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
