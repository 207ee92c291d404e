//! Input validation for the Attrition Decision Engine.
//!
//! Per-field domains are enforced where a record is collected (see
//! [`crate::models::check_domains`]). This module checks the relationships
//! between fields, producing operator-facing messages in a fixed order.

mod consistency;

pub use consistency::{
    CONSISTENCY_RULES, ConsistencyRule, ValidationReport, YEARS_AT_COMPANY_MESSAGE,
    YEARS_IN_ROLE_MESSAGE, YEARS_WITH_MANAGER_MESSAGE, check, validate,
};
