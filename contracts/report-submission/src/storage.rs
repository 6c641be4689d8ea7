use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Report, ReportUpdate};

pub const DEFAULT_MAX_REPORTS: u64 = 10_000;
pub const DEFAULT_SUBMISSION_FEE: i128 = 100;

// -----------------------------------------------------------------------
// Config
// -----------------------------------------------------------------------

pub fn next_report_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextReportId)
        .unwrap_or(0)
}

pub fn set_next_report_id(env: &Env, id: u64) {
    env.storage().instance().set(&DataKey::NextReportId, &id);
}

pub fn max_reports(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::MaxReports)
        .unwrap_or(DEFAULT_MAX_REPORTS)
}

pub fn set_max_reports(env: &Env, max: u64) {
    env.storage().instance().set(&DataKey::MaxReports, &max);
}

pub fn submission_fee(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::SubmissionFee)
        .unwrap_or(DEFAULT_SUBMISSION_FEE)
}

pub fn set_submission_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::SubmissionFee, &fee);
}

pub fn authority(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Authority)
}

pub fn set_authority(env: &Env, authority: &Address) {
    env.storage().instance().set(&DataKey::Authority, authority);
}

pub fn fee_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::FeeToken)
}

pub fn set_fee_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::FeeToken, token);
}

// -----------------------------------------------------------------------
// Ban list
// -----------------------------------------------------------------------

pub fn is_banned(env: &Env, reporter: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Banned(reporter.clone()))
        .unwrap_or(false)
}

pub fn ban(env: &Env, reporter: &Address) {
    env.storage().persistent().set(&DataKey::Banned(reporter.clone()), &true);
}

// -----------------------------------------------------------------------
// Reports
// -----------------------------------------------------------------------

pub fn has_report(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Report(id))
}

pub fn load_report(env: &Env, id: u64) -> Option<Report> {
    env.storage().persistent().get(&DataKey::Report(id))
}

pub fn save_report(env: &Env, id: u64, report: &Report) {
    env.storage().persistent().set(&DataKey::Report(id), report);
}

pub fn load_report_update(env: &Env, id: u64) -> Option<ReportUpdate> {
    env.storage().persistent().get(&DataKey::ReportUpdate(id))
}

pub fn save_report_update(env: &Env, id: u64, update: &ReportUpdate) {
    env.storage().persistent().set(&DataKey::ReportUpdate(id), update);
}

pub fn reporter_reports(env: &Env, reporter: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::ReporterReports(reporter.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn add_reporter_report(env: &Env, reporter: &Address, id: u64) {
    let mut ids = reporter_reports(env, reporter);
    ids.push_back(id);
    env.storage()
        .persistent()
        .set(&DataKey::ReporterReports(reporter.clone()), &ids);
}
