use crate::types::{DissolveState, NeuronId, NeuronPermission, SnsNeuron, SnsNeuronPermissionType};
use candid::Principal;

/// Deterministic principal from a seed.
pub fn p(seed: u8) -> Principal {
    Principal::from_slice(&[seed; 29])
}

/// A locked neuron controlled by `p(0)`.
pub fn mock_sns_neuron(id: &[u8]) -> SnsNeuron {
    SnsNeuron {
        id: Some(NeuronId { id: id.to_vec() }),
        permissions: vec![NeuronPermission::new(p(0), SnsNeuronPermissionType::ALL)],
        cached_neuron_stake_e8s: 1_000_000_000,
        neuron_fees_e8s: 0,
        maturity_e8s_equivalent: 0,
        created_timestamp_seconds: 1_600_000_000,
        aging_since_timestamp_seconds: 1_600_000_000,
        dissolve_state: Some(DissolveState::DissolveDelaySeconds(3_600)),
        voting_power_percentage_multiplier: 100,
        source_nns_neuron_id: None,
    }
}
