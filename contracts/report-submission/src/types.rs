use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized = 100,
    InvalidSymptomHash = 101,
    InvalidLocationHash = 102,
    /// Reserved; no entry point returns it yet.
    InvalidTimestamp = 103,
    ReportAlreadyExists = 104,
    InvalidStatus = 105,
    ReporterBanned = 106,
    InvalidReportId = 107,
    InvalidPrivacyLevel = 108,
    InvalidSeverity = 109,
    InvalidCategory = 110,
    MaxReportsExceeded = 111,
    InvalidUpdateParam = 112,
    UpdateNotAllowed = 113,
    AuthorityNotVerified = 114,
    InvalidAnonymityLevel = 115,
    InvalidAgeGroup = 116,
    InvalidGender = 117,
    InvalidContactInfo = 118,
    AuthorityAlreadySet = 119,
    InvalidReportType = 120,
}

/// Review state of a report.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReportStatus {
    /// Awaiting review; the reporter may still amend hashes.
    Pending,
    Validated,
    Rejected,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AgeGroup {
    /// "0-18"
    Under19,
    /// "19-35"
    From19To35,
    /// "36-60"
    From36To60,
    /// "60+"
    Over60,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReportType {
    Symptom,
    Outbreak,
    TestResult,
}

/// Descriptive fields of a submission, as supplied by the reporter.
///
/// Age group, gender and report type arrive as text and are parsed into
/// their typed forms on submission.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportDetails {
    pub privacy_level: u32,
    pub severity: u32,
    pub category: String,
    pub anonymity_level: u32,
    pub age_group: String,
    pub gender: String,
    pub contact_info: Option<String>,
    pub report_type: String,
}

/// A submitted health report.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub reporter: Address,
    pub symptom_hash: BytesN<32>,
    pub location_hash: BytesN<32>,
    pub timestamp: u64,
    pub status: ReportStatus,
    pub privacy_level: u32,
    pub severity: u32,
    pub category: String,
    pub anonymity_level: u32,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub contact_info: Option<String>,
    pub verification_status: bool,
    pub report_type: ReportType,
}

/// Last hash revision made by the reporter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportUpdate {
    pub update_symptom_hash: BytesN<32>,
    pub update_location_hash: BytesN<32>,
    pub update_timestamp: u64,
    pub updater: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Next report id; also the number of reports submitted.
    NextReportId,
    MaxReports,
    SubmissionFee,
    /// Bound once by set_authority_contract.
    Authority,
    /// Token contract the submission fee is paid in.
    FeeToken,
    /// reporter -> bool
    Banned(Address),
    /// report_id -> Report
    Report(u64),
    /// report_id -> ReportUpdate
    ReportUpdate(u64),
    /// reporter -> Vec<u64> (report ids)
    ReporterReports(Address),
}
