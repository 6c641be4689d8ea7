#![no_std]

mod storage;
mod types;
mod validation;


use soroban_sdk::{
    contract, contractimpl, log, symbol_short, token, Address, Bytes, BytesN, Env, String, Vec,
};
use storage::*;
use types::*;
use validation::*;

#[contract]
pub struct ReportSubmissionContract;

#[contractimpl]
impl ReportSubmissionContract {
    // -------------------------------------------------------------------
    // Administration
    // -------------------------------------------------------------------

    /// Binds the authority allowed to review reports. Can only happen once.
    pub fn set_authority_contract(env: Env, authority: Address) -> Result<(), Error> {
        authority.require_auth();

        if storage::authority(&env).is_some() {
            return Err(Error::AuthorityAlreadySet);
        }

        set_authority(&env, &authority);

        env.events().publish((symbol_short!("auth_set"),), authority);

        Ok(())
    }

    /// Caps the total number of reports that can ever be submitted.
    ///
    /// Needs a bound authority but no signature: any caller may change the cap.
    pub fn set_max_reports(env: Env, new_max: u64) -> Result<(), Error> {
        if new_max == 0 {
            return Err(Error::InvalidUpdateParam);
        }
        if storage::authority(&env).is_none() {
            return Err(Error::AuthorityNotVerified);
        }

        storage::set_max_reports(&env, new_max);

        env.events().publish((symbol_short!("max_set"),), new_max);

        Ok(())
    }

    /// Sets the fee charged per submission. Zero disables the charge.
    ///
    /// Needs a bound authority but no signature: any caller may change the fee.
    pub fn set_submission_fee(env: Env, new_fee: i128) -> Result<(), Error> {
        if new_fee < 0 {
            return Err(Error::InvalidUpdateParam);
        }
        if storage::authority(&env).is_none() {
            return Err(Error::AuthorityNotVerified);
        }

        storage::set_submission_fee(&env, new_fee);

        env.events().publish((symbol_short!("fee_set"),), new_fee);

        Ok(())
    }

    /// Sets the token contract submission fees are settled in.
    ///
    /// Without a fee token the fee is only recorded as a `fee` event.
    pub fn set_fee_token(env: Env, token: Address) -> Result<(), Error> {
        let authority = storage::authority(&env).ok_or(Error::AuthorityNotVerified)?;
        authority.require_auth();

        storage::set_fee_token(&env, &token);

        env.events().publish((symbol_short!("token_set"),), token);

        Ok(())
    }

    pub fn ban_reporter(env: Env, caller: Address, reporter: Address) -> Result<(), Error> {
        caller.require_auth();

        if storage::authority(&env) != Some(caller) {
            return Err(Error::NotAuthorized);
        }

        ban(&env, &reporter);

        env.events().publish((symbol_short!("banned"),), reporter);

        Ok(())
    }

    // -------------------------------------------------------------------
    // Reports
    // -------------------------------------------------------------------

    /// Submit a new health report and pay the submission fee.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    /// The new report starts out `Pending`.
    pub fn submit_report(
        env: Env,
        reporter: Address,
        symptom_hash: Bytes,
        location_hash: Bytes,
        details: ReportDetails,
    ) -> Result<u64, Error> {
        reporter.require_auth();

        let report_id = next_report_id(&env);

        let checked = Self::check_submission(
            &env,
            report_id,
            &reporter,
            &symptom_hash,
            &location_hash,
            &details,
        )
        .map_err(|err| {
            log!(&env, "report rejected", reporter, err as u32);
            err
        })?;

        let fee = submission_fee(&env);
        if fee > 0 {
            if let Some(fee_token) = storage::fee_token(&env) {
                token::TokenClient::new(&env, &fee_token)
                    .transfer(&reporter, &checked.authority, &fee);
            }
        }
        env.events()
            .publish((symbol_short!("fee"),), (fee, reporter.clone(), checked.authority));

        let report = Report {
            reporter: reporter.clone(),
            symptom_hash: checked.symptom_hash,
            location_hash: checked.location_hash,
            timestamp: env.ledger().timestamp(),
            status: ReportStatus::Pending,
            privacy_level: details.privacy_level,
            severity: details.severity,
            category: details.category,
            anonymity_level: details.anonymity_level,
            age_group: checked.age_group,
            gender: checked.gender,
            contact_info: details.contact_info,
            verification_status: false,
            report_type: checked.report_type,
        };

        save_report(&env, report_id, &report);
        add_reporter_report(&env, &reporter, report_id);
        set_next_report_id(&env, report_id + 1);

        env.events().publish((symbol_short!("submitted"),), (report_id, reporter));

        Ok(report_id)
    }

    /// Replace the hashes of a pending report. Only its reporter may do so.
    pub fn update_report(
        env: Env,
        reporter: Address,
        report_id: u64,
        new_symptom_hash: Bytes,
        new_location_hash: Bytes,
    ) -> Result<(), Error> {
        reporter.require_auth();

        let mut report = load_report(&env, report_id).ok_or(Error::InvalidReportId)?;

        if report.reporter != reporter {
            return Err(Error::NotAuthorized);
        }

        if report.status != ReportStatus::Pending {
            log!(&env, "update refused, report not pending", report_id);
            return Err(Error::UpdateNotAllowed);
        }

        let symptom_hash = validate_hash(&env, &new_symptom_hash, Error::InvalidSymptomHash)?;
        let location_hash = validate_hash(&env, &new_location_hash, Error::InvalidLocationHash)?;
        let now = env.ledger().timestamp();

        report.symptom_hash = symptom_hash.clone();
        report.location_hash = location_hash.clone();
        report.timestamp = now;
        save_report(&env, report_id, &report);

        save_report_update(
            &env,
            report_id,
            &ReportUpdate {
                update_symptom_hash: symptom_hash,
                update_location_hash: location_hash,
                update_timestamp: now,
                updater: reporter.clone(),
            },
        );

        env.events().publish((symbol_short!("updated"),), (report_id, reporter));

        Ok(())
    }

    /// Record the authority's verdict on a report.
    ///
    /// Valid statuses: `pending`, `validated`, `rejected`. Any of them may be
    /// written at any time; earlier verdicts are simply overwritten.
    pub fn set_report_status(
        env: Env,
        caller: Address,
        report_id: u64,
        new_status: String,
    ) -> Result<(), Error> {
        caller.require_auth();

        if storage::authority(&env) != Some(caller) {
            return Err(Error::NotAuthorized);
        }

        let status = parse_status(&env, &new_status)?;
        let mut report = load_report(&env, report_id).ok_or(Error::InvalidReportId)?;

        report.status = status;
        save_report(&env, report_id, &report);

        env.events().publish((symbol_short!("status"),), (report_id, status));

        Ok(())
    }

    // -------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------

    pub fn get_report(env: Env, report_id: u64) -> Option<Report> {
        load_report(&env, report_id)
    }

    pub fn get_report_count(env: Env) -> u64 {
        next_report_id(&env)
    }

    pub fn get_report_update(env: Env, report_id: u64) -> Option<ReportUpdate> {
        load_report_update(&env, report_id)
    }

    /// Ids of every report submitted by `reporter`, oldest first.
    pub fn get_reports_by_reporter(env: Env, reporter: Address) -> Vec<u64> {
        reporter_reports(&env, &reporter)
    }

    pub fn is_reporter_banned(env: Env, reporter: Address) -> bool {
        is_banned(&env, &reporter)
    }

    pub fn get_authority(env: Env) -> Option<Address> {
        storage::authority(&env)
    }

    pub fn get_submission_fee(env: Env) -> i128 {
        submission_fee(&env)
    }

    pub fn get_max_reports(env: Env) -> u64 {
        max_reports(&env)
    }

    pub fn get_fee_token(env: Env) -> Option<Address> {
        storage::fee_token(&env)
    }
}

/// Submission fields that passed validation, plus the authority the fee goes to.
struct CheckedSubmission {
    symptom_hash: BytesN<32>,
    location_hash: BytesN<32>,
    age_group: AgeGroup,
    gender: Gender,
    report_type: ReportType,
    authority: Address,
}

impl ReportSubmissionContract {
    fn check_submission(
        env: &Env,
        report_id: u64,
        reporter: &Address,
        symptom_hash: &Bytes,
        location_hash: &Bytes,
        details: &ReportDetails,
    ) -> Result<CheckedSubmission, Error> {
        if report_id >= max_reports(env) {
            return Err(Error::MaxReportsExceeded);
        }
        if is_banned(env, reporter) {
            return Err(Error::ReporterBanned);
        }

        let symptom_hash = validate_hash(env, symptom_hash, Error::InvalidSymptomHash)?;
        let location_hash = validate_hash(env, location_hash, Error::InvalidLocationHash)?;
        validate_privacy_level(details.privacy_level)?;
        validate_severity(details.severity)?;
        validate_category(&details.category)?;
        validate_anonymity_level(details.anonymity_level)?;
        let age_group = parse_age_group(env, &details.age_group)?;
        let gender = parse_gender(env, &details.gender)?;
        validate_contact_info(&details.contact_info)?;
        let report_type = parse_report_type(env, &details.report_type)?;

        let authority = storage::authority(env).ok_or(Error::AuthorityNotVerified)?;

        if has_report(env, report_id) {
            return Err(Error::ReportAlreadyExists);
        }

        Ok(CheckedSubmission {
            symptom_hash,
            location_hash,
            age_group,
            gender,
            report_type,
            authority,
        })
    }
}
