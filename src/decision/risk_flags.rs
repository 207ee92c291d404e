//! Rule-based risk indicators.
//!
//! These heuristics annotate a decision with well-known attrition drivers.
//! They look only at the raw input and never feed back into the
//! classifier's label or probability.

use crate::models::{AuditStep, EmployeeRecord};

/// Highest satisfaction/balance score still considered low.
pub const LOW_SCORE_CEILING: u8 = 2;

/// A single risk rule.
#[derive(Debug, Clone, Copy)]
pub struct RiskRule {
    /// Stable identifier for audit output.
    pub rule_id: &'static str,
    /// The human-readable name of the rule.
    pub rule_name: &'static str,
    /// The feature the rule inspects.
    pub field: &'static str,
    /// The flag text emitted when the rule fires.
    pub message: &'static str,
    fires: fn(&EmployeeRecord) -> bool,
    value: fn(&EmployeeRecord) -> u32,
}

impl RiskRule {
    /// Returns true if the rule fires for this record.
    pub fn fires(&self, record: &EmployeeRecord) -> bool {
        (self.fires)(record)
    }
}

fn frequent_overtime(r: &EmployeeRecord) -> bool {
    r.over_time
}

fn low_job_satisfaction(r: &EmployeeRecord) -> bool {
    r.job_satisfaction <= LOW_SCORE_CEILING
}

fn poor_work_life_balance(r: &EmployeeRecord) -> bool {
    r.work_life_balance <= LOW_SCORE_CEILING
}

fn overtime_value(r: &EmployeeRecord) -> u32 {
    u32::from(r.over_time)
}

fn job_satisfaction_value(r: &EmployeeRecord) -> u32 {
    u32::from(r.job_satisfaction)
}

fn work_life_balance_value(r: &EmployeeRecord) -> u32 {
    u32::from(r.work_life_balance)
}

/// The risk rules, in the order their flags are reported.
pub const RISK_RULES: [RiskRule; 3] = [
    RiskRule {
        rule_id: "frequent_overtime",
        rule_name: "Frequent Overtime",
        field: "OverTime",
        message: "Employee is doing overtime frequently.",
        fires: frequent_overtime,
        value: overtime_value,
    },
    RiskRule {
        rule_id: "low_job_satisfaction",
        rule_name: "Low Job Satisfaction",
        field: "JobSatisfaction",
        message: "Low job satisfaction may increase attrition risk.",
        fires: low_job_satisfaction,
        value: job_satisfaction_value,
    },
    RiskRule {
        rule_id: "poor_work_life_balance",
        rule_name: "Poor Work-Life Balance",
        field: "WorkLifeBalance",
        message: "Poor work-life balance may increase attrition risk.",
        fires: poor_work_life_balance,
        value: work_life_balance_value,
    },
];

/// The flags that fired for a record, plus one audit step per rule.
#[derive(Debug, Clone)]
pub struct RiskAssessment {
    /// Flag messages, in rule order.
    pub flags: Vec<String>,
    /// One audit step per evaluated rule, fired or not.
    pub audit_steps: Vec<AuditStep>,
}

/// Evaluates every risk rule against a record.
///
/// # Arguments
///
/// * `record` - The validated employee record
/// * `first_step` - The audit step number assigned to the first rule
pub fn assess_risk(record: &EmployeeRecord, first_step: u32) -> RiskAssessment {
    let mut flags = Vec::new();
    let mut audit_steps = Vec::with_capacity(RISK_RULES.len());

    for (step_number, rule) in (first_step..).zip(RISK_RULES.iter()) {
        let value = (rule.value)(record);
        let fired = rule.fires(record);

        if fired {
            flags.push(rule.message.to_string());
        }

        let reasoning = if fired {
            format!("{} = {} - flag raised: {}", rule.field, value, rule.message)
        } else {
            format!("{} = {} - no flag", rule.field, value)
        };

        audit_steps.push(AuditStep {
            step_number,
            rule_id: rule.rule_id.to_string(),
            rule_name: rule.rule_name.to_string(),
            input: serde_json::json!({ rule.field: value }),
            output: serde_json::json!({ "fired": fired }),
            reasoning,
        });
    }

    RiskAssessment { flags, audit_steps }
}

/// Returns the risk flags for a record, in rule order.
///
/// # Examples
///
/// ```
/// use attrition_engine::decision::derive_risk_flags;
/// use attrition_engine::models::EmployeeRecord;
///
/// let record = EmployeeRecord {
///     over_time: true,
///     job_satisfaction: 4,
///     work_life_balance: 4,
///     ..EmployeeRecord::default()
/// };
/// assert_eq!(derive_risk_flags(&record), vec!["Employee is doing overtime frequently."]);
/// ```
pub fn derive_risk_flags(record: &EmployeeRecord) -> Vec<String> {
    assess_risk(record, 1).flags
}
