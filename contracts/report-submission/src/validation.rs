//! Field validators for report submission and review.
//!
//! Each check maps a bad input to exactly one error code, so callers can run
//! them in sequence and surface the first failure.

use soroban_sdk::{Bytes, BytesN, Env, String};

use crate::types::{AgeGroup, Error, Gender, ReportStatus, ReportType};

pub const HASH_LENGTH: u32 = 32;
pub const MAX_PRIVACY_LEVEL: u32 = 5;
pub const MIN_SEVERITY: u32 = 1;
pub const MAX_SEVERITY: u32 = 10;
pub const MAX_CATEGORY_LENGTH: u32 = 50;
pub const MAX_ANONYMITY_LEVEL: u32 = 3;
pub const MAX_CONTACT_INFO_LENGTH: u32 = 100;

const MAX_CHAR_BYTES: usize = 4;

/// Converts a caller-supplied hash into a fixed 32-byte hash, returning
/// `error` when the length is wrong.
pub fn validate_hash(env: &Env, hash: &Bytes, error: Error) -> Result<BytesN<32>, Error> {
    if hash.len() != HASH_LENGTH {
        return Err(error);
    }
    let mut buf = [0u8; 32];
    hash.copy_into_slice(&mut buf);
    Ok(BytesN::from_array(env, &buf))
}

pub fn validate_privacy_level(level: u32) -> Result<(), Error> {
    if level > MAX_PRIVACY_LEVEL {
        return Err(Error::InvalidPrivacyLevel);
    }
    Ok(())
}

pub fn validate_severity(severity: u32) -> Result<(), Error> {
    if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&severity) {
        return Err(Error::InvalidSeverity);
    }
    Ok(())
}

/// Returns true when `value` holds more than `max_chars` UTF-8 characters.
///
/// Limits are in characters, not bytes, so continuation bytes
/// (`0b10xx_xxxx`) are not counted.
fn exceeds_chars(value: &String, max_chars: u32) -> bool {
    let len = value.len() as usize;
    if len <= max_chars as usize {
        return false;
    }
    // No character is wider than four bytes.
    if len > MAX_CHAR_BYTES * max_chars as usize {
        return true;
    }
    let mut buf = [0u8; MAX_CHAR_BYTES * MAX_CONTACT_INFO_LENGTH as usize];
    let bytes = &mut buf[..len];
    value.copy_into_slice(bytes);
    let chars = bytes.iter().filter(|b| (**b & 0xC0) != 0x80).count();
    chars > max_chars as usize
}

pub fn validate_category(category: &String) -> Result<(), Error> {
    if category.is_empty() || exceeds_chars(category, MAX_CATEGORY_LENGTH) {
        return Err(Error::InvalidCategory);
    }
    Ok(())
}

pub fn validate_anonymity_level(level: u32) -> Result<(), Error> {
    if level > MAX_ANONYMITY_LEVEL {
        return Err(Error::InvalidAnonymityLevel);
    }
    Ok(())
}

pub fn validate_contact_info(contact_info: &Option<String>) -> Result<(), Error> {
    match contact_info {
        Some(info) if exceeds_chars(info, MAX_CONTACT_INFO_LENGTH) => {
            Err(Error::InvalidContactInfo)
        }
        _ => Ok(()),
    }
}

// -----------------------------------------------------------------------
// Enumerated text fields
// -----------------------------------------------------------------------

pub fn parse_age_group(env: &Env, value: &String) -> Result<AgeGroup, Error> {
    if *value == String::from_str(env, "0-18") {
        Ok(AgeGroup::Under19)
    } else if *value == String::from_str(env, "19-35") {
        Ok(AgeGroup::From19To35)
    } else if *value == String::from_str(env, "36-60") {
        Ok(AgeGroup::From36To60)
    } else if *value == String::from_str(env, "60+") {
        Ok(AgeGroup::Over60)
    } else {
        Err(Error::InvalidAgeGroup)
    }
}

pub fn parse_gender(env: &Env, value: &String) -> Result<Gender, Error> {
    if *value == String::from_str(env, "male") {
        Ok(Gender::Male)
    } else if *value == String::from_str(env, "female") {
        Ok(Gender::Female)
    } else if *value == String::from_str(env, "other") {
        Ok(Gender::Other)
    } else {
        Err(Error::InvalidGender)
    }
}

pub fn parse_report_type(env: &Env, value: &String) -> Result<ReportType, Error> {
    if *value == String::from_str(env, "symptom") {
        Ok(ReportType::Symptom)
    } else if *value == String::from_str(env, "outbreak") {
        Ok(ReportType::Outbreak)
    } else if *value == String::from_str(env, "test-result") {
        Ok(ReportType::TestResult)
    } else {
        Err(Error::InvalidReportType)
    }
}

pub fn parse_status(env: &Env, value: &String) -> Result<ReportStatus, Error> {
    if *value == String::from_str(env, "pending") {
        Ok(ReportStatus::Pending)
    } else if *value == String::from_str(env, "validated") {
        Ok(ReportStatus::Validated)
    } else if *value == String::from_str(env, "rejected") {
        Ok(ReportStatus::Rejected)
    } else {
        Err(Error::InvalidStatus)
    }
}
