//! Member record types.
//!
//! This module defines the central `Member` entity along with the closed
//! enumerations it depends on (tier, city, marital status). All enumeration
//! consumers match exhaustively so that adding a variant is a compile-time
//! checked change rather than a runtime string-matching gap.

use std::fmt;
use std::path::PathBuf;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Membership tier classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemberTier {
    #[default]
    Silver,
    Gold,
    Diamond,
    Platinum,
}

impl MemberTier {
    /// All tiers in ascending order, for pickers and dashboard breakdowns.
    pub const ALL: [MemberTier; 4] = [
        MemberTier::Silver,
        MemberTier::Gold,
        MemberTier::Diamond,
        MemberTier::Platinum,
    ];

    /// Get the display name for this tier.
    pub fn display(&self) -> &'static str {
        match self {
            MemberTier::Silver => "Silver",
            MemberTier::Gold => "Gold",
            MemberTier::Diamond => "Diamond",
            MemberTier::Platinum => "Platinum",
        }
    }

    /// Get the accent color used when rendering this tier.
    pub fn color(&self) -> Color {
        match self {
            MemberTier::Silver => Color::Gray,
            MemberTier::Gold => Color::Yellow,
            MemberTier::Diamond => Color::Cyan,
            MemberTier::Platinum => Color::Magenta,
        }
    }

    /// Get the badge icon for this tier.
    pub fn icon(&self) -> &'static str {
        match self {
            MemberTier::Silver => "○",
            MemberTier::Gold => "●",
            MemberTier::Diamond => "◆",
            MemberTier::Platinum => "★",
        }
    }
}

impl fmt::Display for MemberTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Marital status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    /// All statuses, for form pickers.
    pub const ALL: [MaritalStatus; 4] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Divorced,
        MaritalStatus::Widowed,
    ];

    /// Get the display name for this status.
    pub fn display(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// The cities a member can be registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum City {
    #[default]
    Mumbai,
    Delhi,
    Bengaluru,
    Chennai,
    Kolkata,
    Hyderabad,
    Pune,
    Ahmedabad,
}

impl City {
    /// All cities, for form pickers.
    pub const ALL: [City; 8] = [
        City::Mumbai,
        City::Delhi,
        City::Bengaluru,
        City::Chennai,
        City::Kolkata,
        City::Hyderabad,
        City::Pune,
        City::Ahmedabad,
    ];

    /// Get the display name for this city.
    pub fn display(&self) -> &'static str {
        match self {
            City::Mumbai => "Mumbai",
            City::Delhi => "Delhi",
            City::Bengaluru => "Bengaluru",
            City::Chennai => "Chennai",
            City::Kolkata => "Kolkata",
            City::Hyderabad => "Hyderabad",
            City::Pune => "Pune",
            City::Ahmedabad => "Ahmedabad",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// An opaque reference to a file supplied by the user.
///
/// The application never opens, parses, or validates the file contents;
/// only the name is shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// The display name of the file.
    pub file_name: String,
    /// Where the file lives on disk.
    pub path: PathBuf,
}

impl Attachment {
    /// Create an attachment from a path, deriving the display name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { file_name, path }
    }
}

/// A single insurance-member record.
///
/// `id` and `member_id` are assigned by the store at creation and never
/// change across edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Store-assigned unique id.
    pub id: u32,
    /// Formatted member number, e.g. "MBR004". Derived from `id` once.
    pub member_id: String,
    /// Full name.
    pub name: String,
    /// Membership tier.
    pub tier: MemberTier,
    /// Street address.
    pub address: String,
    /// Registered city.
    pub city: City,
    /// Mobile number.
    pub mobile: String,
    /// Whether the membership is active.
    pub active: bool,
    /// Date of birth (ISO date string).
    pub dob: String,
    /// Marital status.
    pub marital_status: MaritalStatus,
    /// PAN card number.
    pub pan: String,
    /// Aadhaar number (12-digit numeral string, stored unformatted).
    pub aadhaar: String,
    /// Member photo, if one was supplied.
    #[serde(default)]
    pub photo: Option<Attachment>,
    /// Proof-of-address document, if supplied.
    #[serde(default)]
    pub proof_of_address: Option<Attachment>,
    /// Wedding anniversary (ISO date string), if applicable.
    #[serde(default)]
    pub anniversary_date: Option<String>,
    /// Next policy renewal date (ISO date string).
    pub policy_renewal_date: String,
    /// Name of the held policy.
    pub policy_name: String,
    /// Policy number.
    pub policy_number: String,
}

impl Member {
    /// Format the aadhaar number for display in groups of four digits.
    ///
    /// This is presentation only; the stored value is untouched.
    pub fn aadhaar_display(&self) -> String {
        let digits: Vec<char> = self.aadhaar.chars().collect();
        digits
            .chunks(4)
            .map(|c| c.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The editable portion of a member record.
///
/// Drafts carry everything except identity; the store fills in `id` and
/// `member_id` on creation and preserves them on update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberDraft {
    pub name: String,
    pub tier: MemberTier,
    pub address: String,
    pub city: City,
    pub mobile: String,
    pub active: bool,
    pub dob: String,
    pub marital_status: MaritalStatus,
    pub pan: String,
    pub aadhaar: String,
    pub photo: Option<Attachment>,
    pub proof_of_address: Option<Attachment>,
    pub anniversary_date: Option<String>,
    pub policy_renewal_date: String,
    pub policy_name: String,
    pub policy_number: String,
}

impl MemberDraft {
    /// Build a draft from an existing record, dropping identity fields.
    pub fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            tier: member.tier,
            address: member.address.clone(),
            city: member.city,
            mobile: member.mobile.clone(),
            active: member.active,
            dob: member.dob.clone(),
            marital_status: member.marital_status,
            pan: member.pan.clone(),
            aadhaar: member.aadhaar.clone(),
            photo: member.photo.clone(),
            proof_of_address: member.proof_of_address.clone(),
            anniversary_date: member.anniversary_date.clone(),
            policy_renewal_date: member.policy_renewal_date.clone(),
            policy_name: member.policy_name.clone(),
            policy_number: member.policy_number.clone(),
        }
    }
}
