//! Final record construction.
//!
//! One source row becomes one record per joint-GP member, in split order.
//! Selection amounts are shared out equally between members and the
//! undivided values are kept alongside; applicant listings carry their
//! amounts through unchanged since they have no field for the originals.

use fund_disclosure_models::{ApplicationRecord, Currency, SelectionRecord};

use crate::fields::{ApplicationAmounts, SelectionAmounts};
use crate::joint_gp::JointGpGroup;

/// Builds applicant listing records for every member of `group`.
#[must_use]
pub fn assemble_application(
    category: Option<&str>,
    group: &JointGpGroup,
    amounts: ApplicationAmounts,
) -> Vec<ApplicationRecord> {
    let is_joint_gp = group.is_joint();
    let original_company = is_joint_gp.then(|| group.original().to_owned());

    group
        .members()
        .iter()
        .map(|company| ApplicationRecord {
            category: category.map(str::to_owned),
            company: company.clone(),
            amount_planned: amounts.amount_planned,
            amount_requested: amounts.amount_requested,
            is_joint_gp,
            original_company: original_company.clone(),
        })
        .collect()
}

/// Builds selection records for every member of `group`, pro-rating the
/// amounts across members.
#[must_use]
pub fn assemble_selection(
    category: Option<&str>,
    group: &JointGpGroup,
    amounts: SelectionAmounts,
    currency: Currency,
) -> Vec<SelectionRecord> {
    let is_joint_gp = group.is_joint();
    let share = amounts.prorated(group.len());
    let original = if is_joint_gp {
        amounts
    } else {
        SelectionAmounts::default()
    };

    group
        .members()
        .iter()
        .map(|company| SelectionRecord {
            company: company.clone(),
            category: category.map(str::to_owned),
            min_formation: share.min_formation,
            mo_tae: share.mo_tae,
            fund_size: share.fund_size,
            request_amount: share.request_amount,
            currency,
            is_joint_gp,
            original_company: is_joint_gp.then(|| group.original().to_owned()),
            joint_gp_count: is_joint_gp.then(|| group.len()),
            original_min_formation: original.min_formation,
            original_mo_tae: original.mo_tae,
            original_fund_size: original.fund_size,
            original_request_amount: original.request_amount,
            amount_planned: share.fund_size,
            amount_requested: share.request_amount,
        })
        .collect()
}
