use serde::{Deserialize, Serialize};
use std::fmt;

use crate::issue::{Issue, Severity};

/// Named check in the rule catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CheckId {
    // Structural
    TabMissing,
    ColumnMissing,

    // Spreadsheet format
    CodeInvalid,
    FieldsRequired,
    FieldsName,
    FieldsQName,
    TypeStyleInvalid,
    FacetKindInvalid,

    // Type tab
    TypeNameDuplicate,
    TypeNameSimpleSuffix,
    TypeNameComplexSuffix,
    TypeNameCodeEnumeration,
    TypeNameCodeBase,
    TypeNameRepeatedTerm,
    TypeDefinitionOpening,
    TypeOldNameOnAdd,
    TypeBaseRequired,
    TypeBaseSimpleInvalid,
    TypeBaseCscUndefined,

    // Facet tab
    FacetTypeUndefined,
    FacetDefinitionRequired,
}

impl CheckId {
    /// Stable identifier used in reports and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::TabMissing => "spread-format-tab-missing",
            CheckId::ColumnMissing => "spread-format-column-missing",
            CheckId::CodeInvalid => "spread-format-code-invalid",
            CheckId::FieldsRequired => "spread-format-fields-required",
            CheckId::FieldsName => "spread-format-fields-name",
            CheckId::FieldsQName => "spread-format-fields-qname",
            CheckId::TypeStyleInvalid => "type-style-all-invalid",
            CheckId::FacetKindInvalid => "facet-kind-all-invalid",
            CheckId::TypeNameDuplicate => "type-name-duplicate",
            CheckId::TypeNameSimpleSuffix => "type-name-simple-suffix",
            CheckId::TypeNameComplexSuffix => "type-name-complex-suffix",
            CheckId::TypeNameCodeEnumeration => "type-name-code-enumeration",
            CheckId::TypeNameCodeBase => "type-name-code-base",
            CheckId::TypeNameRepeatedTerm => "type-name-repeated-term",
            CheckId::TypeDefinitionOpening => "type-definition-opening",
            CheckId::TypeOldNameOnAdd => "type-old-name-add",
            CheckId::TypeBaseRequired => "type-base-required",
            CheckId::TypeBaseSimpleInvalid => "type-base-simple-invalid",
            CheckId::TypeBaseCscUndefined => "type-base-csc-undefined",
            CheckId::FacetTypeUndefined => "facet-type-undefined",
            CheckId::FacetDefinitionRequired => "facet-definition-enum-required",
        }
    }

    /// One-line summary for listings.
    pub fn description(&self) -> &'static str {
        match self {
            CheckId::TabMissing => "Required tabs are present",
            CheckId::ColumnMissing => "Required columns are present",
            CheckId::CodeInvalid => "Change codes use an allowed value",
            CheckId::FieldsRequired => "Fields required by the change code are filled in",
            CheckId::FieldsName => "Name fields are not qualified",
            CheckId::FieldsQName => "Qualified name fields contain a prefix",
            CheckId::TypeStyleInvalid => "Content styles use an allowed value",
            CheckId::FacetKindInvalid => "Facet kinds use an allowed value",
            CheckId::TypeNameDuplicate => "Added type names are unique",
            CheckId::TypeNameSimpleSuffix => "Simple type names end with 'SimpleType'",
            CheckId::TypeNameComplexSuffix => "Complex type names do not end with 'SimpleType'",
            CheckId::TypeNameCodeEnumeration => "Code simple types declare enumerations",
            CheckId::TypeNameCodeBase => "Code types extend a code simple type",
            CheckId::TypeNameRepeatedTerm => "'Type' appears only as the final term",
            CheckId::TypeDefinitionOpening => "Type definitions use the standard opening",
            CheckId::TypeOldNameOnAdd => "Added types carry no old name",
            CheckId::TypeBaseRequired => "Simple and CSC types name a base type",
            CheckId::TypeBaseSimpleInvalid => "Simple types extend an approved XML type",
            CheckId::TypeBaseCscUndefined => "CSC types extend a simple type from this workbook",
            CheckId::FacetTypeUndefined => "Facets belong to a simple type from this workbook",
            CheckId::FacetDefinitionRequired => "Enumerations carry a definition",
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, CheckId::TabMissing | CheckId::ColumnMissing)
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result bucket of one named check.
///
/// `ran` separates "executed and found nothing" from "never executed"; the
/// structural gate leaves every semantic test unrun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub id: CheckId,
    pub issues: Vec<Issue>,
    pub ran: bool,
}

impl Test {
    pub fn new(id: CheckId) -> Self {
        Self {
            id,
            issues: Vec::new(),
            ran: false,
        }
    }

    pub fn passed(&self) -> bool {
        self.ran && self.issues.is_empty()
    }
}

/// Tests of one validation run, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    pub tests: Vec<Test>,
}

impl TestSuite {
    pub fn new(ids: &[CheckId]) -> Self {
        Self {
            tests: ids.iter().copied().map(Test::new).collect(),
        }
    }

    pub fn get(&self, id: CheckId) -> Option<&Test> {
        self.tests.iter().find(|test| test.id == id)
    }

    /// Mark a test as run and append its issues. Unknown ids are appended as
    /// new tests.
    pub fn record(&mut self, id: CheckId, issues: Vec<Issue>) {
        match self.tests.iter_mut().find(|test| test.id == id) {
            Some(test) => {
                test.ran = true;
                test.issues.extend(issues);
            }
            None => self.tests.push(Test {
                id,
                issues,
                ran: true,
            }),
        }
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.tests.iter().flat_map(|test| test.issues.iter())
    }

    pub fn issue_count(&self) -> usize {
        self.tests.iter().map(|test| test.issues.len()).sum()
    }

    /// Count of errors (Error + Reject severity).
    pub fn error_count(&self) -> usize {
        self.issues()
            .filter(|issue| matches!(issue.severity(), Severity::Error | Severity::Reject))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues()
            .filter(|issue| issue.severity() == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Issues sorted by severity (Reject first, then Error, then Warning),
    /// stable within a severity.
    pub fn sorted_by_severity(&self) -> Vec<&Issue> {
        let mut issues: Vec<_> = self.issues().collect();
        issues.sort_by_key(|issue| issue.severity());
        issues
    }
}
