//! Fixed remediation text shown with every violation.

/// Naming convention every new `testID` should follow.
pub const TESTID_CONVENTION: &str = "<screen>.<component>-<type>";

/// Where the naming standard is documented.
pub const CONVENTION_DOC: &str = "references/testid-convention.md";

/// One-line hint printed under each violation.
#[must_use]
pub fn remediation_hint() -> String {
    format!("Add testID following convention: \"{TESTID_CONVENTION}\"")
}

/// Closing pointer printed after the summary.
#[must_use]
pub fn convention_pointer() -> String {
    format!("See {CONVENTION_DOC} for naming standards.")
}
