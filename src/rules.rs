// src/rules.rs
//! The rule catalogs: which elements need a `testID`, and which context
//! patterns mean one is already supplied.
//!
//! Both catalogs are plain tables. Adding an element type or an exemption is
//! a new row, never a new branch in the scanner.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;

/// Interactive elements that must carry a test identifier: `(label, pattern)`.
pub const ELEMENT_SIGNATURES: &[(&str, &str)] = &[
    ("TouchableOpacity", r"\bTouchableOpacity\b"),
    ("TouchableHighlight", r"\bTouchableHighlight\b"),
    ("TouchableNativeFeedback", r"\bTouchableNativeFeedback\b"),
    ("Pressable", r"\bPressable\b"),
    ("Button", r"\bButton\b"),
    ("TextInput", r"\bTextInput\b"),
    ("Switch", r"\bSwitch\b"),
    ("CheckBox", r"\bCheckBox\b"),
    ("RadioButton", r"\bRadioButton\b"),
];

/// Context patterns that suppress a candidate: `(label, pattern)`.
pub const EXEMPTION_SIGNATURES: &[(&str, &str)] = &[
    ("explicit testID", r"testID="),
    ("spread props", r"\.\.\.props"),
    ("disabled", r"disabled=\{true\}"),
    ("rest props", r"\{\.\.\.rest\}"),
];

/// A class of interactive element.
#[derive(Debug, Clone)]
pub struct ElementSignature {
    pub label: &'static str,
    pub matcher: Regex,
}

/// A context pattern that marks a candidate as compliant.
#[derive(Debug, Clone)]
pub struct ExemptionSignature {
    pub label: &'static str,
    pub matcher: Regex,
}

/// Compiled catalogs, built once and shared for the whole run.
#[derive(Debug, Clone)]
pub struct RuleSet {
    elements: Vec<ElementSignature>,
    exemptions: Vec<ExemptionSignature>,
}

static STANDARD: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(ELEMENT_SIGNATURES, EXEMPTION_SIGNATURES)
        .unwrap_or_else(|e| panic!("Invalid built-in signature: {e}"))
});

impl RuleSet {
    /// Compiles custom catalogs.
    ///
    /// # Errors
    /// Returns error if any pattern is not a valid regex.
    pub fn new(
        elements: &[(&'static str, &str)],
        exemptions: &[(&'static str, &str)],
    ) -> Result<Self> {
        let elements = elements
            .iter()
            .map(|&(label, pattern)| -> Result<ElementSignature> {
                Ok(ElementSignature {
                    label,
                    matcher: Regex::new(pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let exemptions = exemptions
            .iter()
            .map(|&(label, pattern)| -> Result<ExemptionSignature> {
                Ok(ExemptionSignature {
                    label,
                    matcher: Regex::new(pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            elements,
            exemptions,
        })
    }

    /// The built-in catalog.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Label of the first element signature matching `line`, if any.
    #[must_use]
    pub fn match_element(&self, line: &str) -> Option<&'static str> {
        self.elements
            .iter()
            .find(|sig| sig.matcher.is_match(line))
            .map(|sig| sig.label)
    }

    /// Label of the first exemption found in `window`, if any.
    #[must_use]
    pub fn match_exemption(&self, window: &str) -> Option<&'static str> {
        self.exemptions
            .iter()
            .find(|sig| sig.matcher.is_match(window))
            .map(|sig| sig.label)
    }

    #[must_use]
    pub fn elements(&self) -> &[ElementSignature] {
        &self.elements
    }

    #[must_use]
    pub fn exemptions(&self) -> &[ExemptionSignature] {
        &self.exemptions
    }
}
