//! Declarative table of localisation macro shapes.
//!
//! Each rule is a pattern plus the capture groups holding the key, table,
//! comment and bundle arguments. Rules are matched in the order listed here.
//! Overlapping shapes are resolved by this order alone, so keep it stable.

/// A macro shape and where its arguments land in the pattern's captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub key: usize,
    pub table: Option<usize>,
    pub comment: Option<usize>,
    /// Captured for completeness; bundles do not affect which file a key lands in.
    pub bundle: Option<usize>,
}

pub const EXTRACTION_RULES: &[ExtractionRule] = &[
    ExtractionRule {
        name: "NSLocalizedStringFromTableInBundle",
        pattern: r#"NSLocalizedStringFromTableInBundle\(@"([^"]*)",\s*@"([^"]*)",\s*([^,]*),\s*@"([^"]*)"\s*\)"#,
        key: 1,
        table: Some(2),
        comment: Some(4),
        bundle: Some(3),
    },
    ExtractionRule {
        name: "NSLocalizedStringFromTableInBundle (nil comment)",
        pattern: r#"NSLocalizedStringFromTableInBundle\(@"([^"]*)",\s*@"([^"]*)",\s*([^,]*),\s*nil\s*\)"#,
        key: 1,
        table: Some(2),
        comment: None,
        bundle: Some(3),
    },
    ExtractionRule {
        name: "NSLocalizedStringFromTable",
        pattern: r#"NSLocalizedStringFromTable\(@"([^"]*)",\s*@"([^"]*)",\s*@"([^"]*)"\s*\)"#,
        key: 1,
        table: Some(2),
        comment: Some(3),
        bundle: None,
    },
    ExtractionRule {
        name: "NSLocalizedStringFromTable (nil comment)",
        pattern: r#"NSLocalizedStringFromTable\(@"([^"]*)",\s*@"([^"]*)",\s*nil\s*\)"#,
        key: 1,
        table: Some(2),
        comment: None,
        bundle: None,
    },
    ExtractionRule {
        name: "NSLocalizedString",
        pattern: r#"NSLocalizedString\(@"([^"]*)",\s*@"([^"]*)"\s*\)"#,
        key: 1,
        table: None,
        comment: Some(2),
        bundle: None,
    },
    ExtractionRule {
        name: "NSLocalizedString (nil comment)",
        pattern: r#"NSLocalizedString\(@"([^"]*)",\s*nil\s*\)"#,
        key: 1,
        table: None,
        comment: None,
        bundle: None,
    },
];
