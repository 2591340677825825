//! Cross-field row checks.
//!
//! Each module inspects one concern of a single row and returns findings. No
//! check suppresses another; the row runner records them all.

mod attempts;
mod event;
mod presence;
mod scan;
mod totals;
mod weight;

use crate::context::{Finding, RowView};

/// Run every row check in order.
pub fn run_all(row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    // 1. Name must be filled in
    findings.extend(presence::check_name(row));

    // 2. Lift data must agree with the Event, equipment and Place
    findings.extend(event::check(row));

    // 3. Weight class implies a sex
    findings.extend(weight::check_sex(row));

    // 4. Weight class must admit the bodyweight
    findings.extend(weight::check_bodyweight(row));

    // 5. Attempts rise within each lift
    findings.extend(attempts::check_order(row));

    // 6. A successful weight is never attempted again
    findings.extend(attempts::check_retakes(row));

    // 7. Best lifts equal the best successful attempt
    findings.extend(attempts::check_best(row));

    // 8. TotalKg is the sum of the best lifts
    findings.extend(totals::check(row));

    // 9. Whitespace and per-cell validators
    findings.extend(scan::check(row));

    // 10. Sex and Equipment must be filled in
    findings.extend(presence::check_required(row));

    findings
}
