//! In-memory member record store.
//!
//! The store is the single source of truth for the session. Records are held
//! in insertion order; ids are assigned monotonically and `member_id` is
//! derived from the id exactly once, at creation. There is no deletion and
//! nothing survives process restart.

mod filter;
mod member;
mod seed;

pub use filter::{FilterEngine, SearchQuery};
pub use member::{Attachment, City, MaritalStatus, Member, MemberDraft, MemberTier};
pub use seed::seed_members;

use thiserror::Error;
use tracing::{debug, info};

/// Errors produced by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The requested member id does not exist.
    #[error("member with id {0} not found")]
    NotFound(u32),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// The ordered in-memory collection of member records.
#[derive(Debug, Default)]
pub struct MemberStore {
    /// Records in insertion order.
    members: Vec<Member>,
    /// Bumped on every mutation; consumed by the filter engine's memoization.
    revision: u64,
}

impl MemberStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the bundled seed records.
    pub fn with_seed_data() -> Self {
        let members = seed_members();
        info!(count = members.len(), "Seeding member store");
        Self {
            members,
            revision: 0,
        }
    }

    /// Create a member from a draft.
    ///
    /// Assigns the next sequential id and derives the member number from it.
    /// Id assignment is monotonic so no uniqueness conflict is possible.
    pub fn create(&mut self, draft: MemberDraft) -> &Member {
        let id = self.members.len() as u32 + 1;
        let member = Member {
            id,
            member_id: format!("MBR{:03}", id),
            name: draft.name,
            tier: draft.tier,
            address: draft.address,
            city: draft.city,
            mobile: draft.mobile,
            active: draft.active,
            dob: draft.dob,
            marital_status: draft.marital_status,
            pan: draft.pan,
            aadhaar: draft.aadhaar,
            photo: draft.photo,
            proof_of_address: draft.proof_of_address,
            anniversary_date: draft.anniversary_date,
            policy_renewal_date: draft.policy_renewal_date,
            policy_name: draft.policy_name,
            policy_number: draft.policy_number,
        };
        debug!(id, member_id = %member.member_id, "Created member");
        let idx = self.members.len();
        self.members.push(member);
        self.revision += 1;
        &self.members[idx]
    }

    /// Replace the editable fields of the member with the given id.
    ///
    /// `id` and `member_id` are preserved from the stored record. Updating
    /// an id that is not present reports `StoreError::NotFound` rather than
    /// silently doing nothing.
    pub fn update(&mut self, id: u32, draft: MemberDraft) -> Result<&Member> {
        let idx = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let member = &mut self.members[idx];

        member.name = draft.name;
        member.tier = draft.tier;
        member.address = draft.address;
        member.city = draft.city;
        member.mobile = draft.mobile;
        member.active = draft.active;
        member.dob = draft.dob;
        member.marital_status = draft.marital_status;
        member.pan = draft.pan;
        member.aadhaar = draft.aadhaar;
        member.photo = draft.photo;
        member.proof_of_address = draft.proof_of_address;
        member.anniversary_date = draft.anniversary_date;
        member.policy_renewal_date = draft.policy_renewal_date;
        member.policy_name = draft.policy_name;
        member.policy_number = draft.policy_number;

        debug!(id, "Updated member");
        self.revision += 1;
        Ok(&self.members[idx])
    }

    /// Get a member by id.
    pub fn get(&self, id: u32) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// The full record list, in insertion order.
    pub fn list(&self) -> &[Member] {
        &self.members
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The mutation revision counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of active members.
    pub fn active_count(&self) -> usize {
        self.members.iter().filter(|m| m.active).count()
    }

    /// Number of members holding the given tier.
    pub fn tier_count(&self, tier: MemberTier) -> usize {
        self.members.iter().filter(|m| m.tier == tier).count()
    }
}
