//! Cross-field consistency checks.
//!
//! A record that passed per-field domain checks can still describe an
//! impossible career, e.g. more years at the company than years worked in
//! total. These rules catch that before any prediction is made.

use crate::models::EmployeeRecord;

/// A single cross-field rule.
#[derive(Debug, Clone, Copy)]
pub struct ConsistencyRule {
    /// Stable identifier for logs and audit output.
    pub rule_id: &'static str,
    /// The message shown to the operator when the rule is violated.
    pub message: &'static str,
    /// Returns true when the record violates this rule.
    pub violated: fn(&EmployeeRecord) -> bool,
}

/// Violated when years at the company exceed total working years.
pub const YEARS_AT_COMPANY_MESSAGE: &str = "Years at Company cannot exceed Total Working Years.";

/// Violated when years with the current manager exceed years at the company.
pub const YEARS_WITH_MANAGER_MESSAGE: &str =
    "Years with Current Manager cannot exceed Years at Company.";

/// Violated when years in the current role exceed total working years.
pub const YEARS_IN_ROLE_MESSAGE: &str = "Years in Current Role cannot exceed Total Working Years.";

fn years_at_company_exceeds_career(r: &EmployeeRecord) -> bool {
    r.years_at_company > r.total_working_years
}

fn years_with_manager_exceeds_tenure(r: &EmployeeRecord) -> bool {
    r.years_with_curr_manager > r.years_at_company
}

fn years_in_role_exceeds_career(r: &EmployeeRecord) -> bool {
    r.years_in_current_role > r.total_working_years
}

/// The rules, in the order their messages are reported.
pub const CONSISTENCY_RULES: [ConsistencyRule; 3] = [
    ConsistencyRule {
        rule_id: "years_at_company_within_career",
        message: YEARS_AT_COMPANY_MESSAGE,
        violated: years_at_company_exceeds_career,
    },
    ConsistencyRule {
        rule_id: "years_with_manager_within_tenure",
        message: YEARS_WITH_MANAGER_MESSAGE,
        violated: years_with_manager_exceeds_tenure,
    },
    ConsistencyRule {
        rule_id: "years_in_role_within_career",
        message: YEARS_IN_ROLE_MESSAGE,
        violated: years_in_role_exceeds_career,
    },
];

/// The outcome of running every consistency rule against a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Identifiers of the rules that fired, in rule order.
    pub rule_ids: Vec<&'static str>,
    /// Operator-facing messages of the rules that fired, in rule order.
    pub violations: Vec<String>,
}

impl ValidationReport {
    /// Returns true if no rule fired.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Runs every rule and reports all that fired.
///
/// Rules are evaluated independently; a violation never hides a later one.
pub fn check(record: &EmployeeRecord) -> ValidationReport {
    let mut report = ValidationReport::default();

    for rule in CONSISTENCY_RULES.iter().filter(|rule| (rule.violated)(record)) {
        report.rule_ids.push(rule.rule_id);
        report.violations.push(rule.message.to_string());
    }

    report
}

/// Returns the violation messages for a record, or an empty vector if it is consistent.
///
/// # Examples
///
/// ```
/// use attrition_engine::models::EmployeeRecord;
/// use attrition_engine::validation::validate;
///
/// let record = EmployeeRecord {
///     total_working_years: 10,
///     years_at_company: 12,
///     ..EmployeeRecord::default()
/// };
/// assert_eq!(
///     validate(&record),
///     vec!["Years at Company cannot exceed Total Working Years.".to_string()]
/// );
/// ```
pub fn validate(record: &EmployeeRecord) -> Vec<String> {
    check(record).violations
}
