//! The IFS code table shown to the user.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::AffineTransform;

/// One transform as `(a00, a01, a03, a10, a11, a13, weight)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IfsCode {
    pub a00: f64,
    pub a01: f64,
    pub a03: f64,
    pub a10: f64,
    pub a11: f64,
    pub a13: f64,
    pub weight: f64,
}

impl IfsCode {
    pub fn new(transform: &AffineTransform, weight: f64) -> Self {
        let [a00, a01, a03, a10, a11, a13] = transform.ifs_row();
        Self {
            a00,
            a01,
            a03,
            a10,
            a11,
            a13,
            weight,
        }
    }
}

impl fmt::Display for IfsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>9.6}{:>10.6}{:>10.6}{:>10.6}{:>10.6}{:>10.6}{:>10.6}",
            self.a00, self.a01, self.a03, self.a10, self.a11, self.a13, self.weight
        )
    }
}

/// Render the table as text, one newline-terminated row per code
pub fn format_ifs_codes(codes: &[IfsCode]) -> String {
    codes.iter().map(|code| format!("{}\n", code)).collect()
}
