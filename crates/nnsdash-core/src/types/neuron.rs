use candid::{CandidType, Principal};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// SnsNeuronPermissionType
/// Permission codes as they appear on the wire (`permission_type: vec int32`).
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[repr(i32)]
pub enum SnsNeuronPermissionType {
    Unspecified = 0,
    ConfigureDissolveState = 1,
    ManagePrincipals = 2,
    SubmitProposal = 3,
    Vote = 4,
    Disburse = 5,
    Split = 6,
    MergeMaturity = 7,
    DisburseMaturity = 8,
    StakeMaturity = 9,
    ManageVotingPermission = 10,
}

impl SnsNeuronPermissionType {
    pub const ALL: [Self; 11] = [
        Self::Unspecified,
        Self::ConfigureDissolveState,
        Self::ManagePrincipals,
        Self::SubmitProposal,
        Self::Vote,
        Self::Disburse,
        Self::Split,
        Self::MergeMaturity,
        Self::DisburseMaturity,
        Self::StakeMaturity,
        Self::ManageVotingPermission,
    ];

    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Every permission code, the set a controller holds.
    #[must_use]
    pub fn all_codes() -> Vec<i32> {
        Self::ALL.into_iter().map(Self::code).collect()
    }
}

///
/// NeuronId
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct NeuronId {
    pub id: Vec<u8>,
}

///
/// NeuronPermission
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NeuronPermission {
    pub principal: Option<Principal>,
    pub permission_type: Vec<i32>,
}

impl NeuronPermission {
    pub fn new<I>(principal: Principal, permissions: I) -> Self
    where
        I: IntoIterator<Item = SnsNeuronPermissionType>,
    {
        Self {
            principal: Some(principal),
            permission_type: permissions.into_iter().map(SnsNeuronPermissionType::code).collect(),
        }
    }
}

///
/// DissolveState
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DissolveState {
    DissolveDelaySeconds(u64),
    WhenDissolvedTimestampSeconds(u64),
}

///
/// SnsNeuron
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SnsNeuron {
    pub id: Option<NeuronId>,
    pub permissions: Vec<NeuronPermission>,
    pub cached_neuron_stake_e8s: u64,
    pub neuron_fees_e8s: u64,
    pub maturity_e8s_equivalent: u64,
    pub created_timestamp_seconds: u64,
    pub aging_since_timestamp_seconds: u64,
    pub dissolve_state: Option<DissolveState>,
    pub voting_power_percentage_multiplier: u64,
    /// Set on neurons created through the community fund.
    pub source_nns_neuron_id: Option<u64>,
}

///
/// NeuronState
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum NeuronState {
    Locked,
    Dissolving,
    Dissolved,
    Spawning,
}

///
/// NeuronInfo
/// NNS governance neuron summary, as listed for hardware wallets.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NeuronInfo {
    pub neuron_id: u64,
    pub state: NeuronState,
    pub dissolve_delay_seconds: u64,
    pub stake_e8s: u64,
    pub created_timestamp_seconds: u64,
}
