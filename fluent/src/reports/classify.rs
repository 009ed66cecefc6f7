//! Classify command report.

use super::output::{Output, Report};

/// Report data from type classification.
#[derive(Debug)]
pub struct ClassifyReport {
    pub signature: String,
    /// Signature without generic arguments.
    pub raw_type: String,
    pub list: bool,
    pub set: bool,
    /// List or set.
    pub collection: bool,
    pub primitive: bool,
}

impl Report for ClassifyReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("signature", &self.signature);
        out.key_value("raw type", &self.raw_type);
        out.key_value("list", yes_no(self.list));
        out.key_value("set", yes_no(self.set));
        out.key_value("collection", yes_no(self.collection));
        out.key_value("primitive", yes_no(self.primitive));
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}
