//! Queries over decoded SNS neurons.

use crate::types::{
    DissolveState, Identity, NeuronPermission, NeuronState, SnsNeuron, SnsNeuronPermissionType,
};
use candid::Principal;

/// Newest first. Ties keep their input order.
#[must_use]
pub fn sort_sns_neurons_by_created_timestamp(neurons: &[SnsNeuron]) -> Vec<SnsNeuron> {
    let mut sorted = neurons.to_vec();
    sorted.sort_by(|a, b| b.created_timestamp_seconds.cmp(&a.created_timestamp_seconds));

    sorted
}

/// No dissolve state means dissolved; a dissolve timestamp that has already
/// passed does too.
#[must_use]
pub const fn get_sns_neuron_state(neuron: &SnsNeuron, now_secs: u64) -> NeuronState {
    match neuron.dissolve_state {
        None => NeuronState::Dissolved,
        Some(DissolveState::DissolveDelaySeconds(_)) => NeuronState::Locked,
        Some(DissolveState::WhenDissolvedTimestampSeconds(ts)) if ts > now_secs => {
            NeuronState::Dissolving
        }
        Some(DissolveState::WhenDissolvedTimestampSeconds(_)) => NeuronState::Dissolved,
    }
}

/// Seconds until a dissolving neuron is dissolved.
#[must_use]
pub const fn get_sns_dissolving_time_in_seconds(neuron: &SnsNeuron, now_secs: u64) -> Option<u64> {
    match neuron.dissolve_state {
        Some(DissolveState::WhenDissolvedTimestampSeconds(ts)) if ts > now_secs => {
            Some(ts - now_secs)
        }
        _ => None,
    }
}

/// Dissolve delay of a locked neuron.
#[must_use]
pub const fn get_sns_locked_time_in_seconds(neuron: &SnsNeuron) -> Option<u64> {
    match neuron.dissolve_state {
        Some(DissolveState::DissolveDelaySeconds(delay)) => Some(delay),
        _ => None,
    }
}

/// Stake minus accrued fees.
#[must_use]
pub const fn get_sns_neuron_stake(neuron: &SnsNeuron) -> u64 {
    neuron
        .cached_neuron_stake_e8s
        .saturating_sub(neuron.neuron_fees_e8s)
}

#[must_use]
pub fn get_sns_neuron_id_as_hex_string(neuron: &SnsNeuron) -> String {
    neuron
        .id
        .as_ref()
        .map(|id| hex::encode(&id.id))
        .unwrap_or_default()
}

#[must_use]
pub fn get_sns_neuron_by_hex_id<'a>(
    neurons: Option<&'a [SnsNeuron]>,
    neuron_id_hex: &str,
) -> Option<&'a SnsNeuron> {
    neurons?
        .iter()
        .find(|neuron| get_sns_neuron_id_as_hex_string(neuron) == neuron_id_hex)
}

#[must_use]
pub const fn is_community_fund_neuron(neuron: &SnsNeuron) -> bool {
    neuron.source_nns_neuron_id.is_some()
}

///
/// Routes
/// `/#/project/<root canister id>/neuron/<neuron id>`
///

fn route_path_segments(path: &str) -> Option<(&str, &str)> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    segments.windows(4).find_map(|w| match w {
        ["project", root, "neuron", id] => Some((*root, *id)),
        _ => None,
    })
}

#[must_use]
pub fn route_path_sns_neuron_id(path: &str) -> Option<String> {
    route_path_segments(path).map(|(_, id)| id.to_string())
}

#[must_use]
pub fn route_path_sns_neuron_root_canister_id(path: &str) -> Option<String> {
    route_path_segments(path).map(|(root, _)| root.to_string())
}

///
/// Permissions
///

fn has_permission(permission_type: &[i32], wanted: SnsNeuronPermissionType) -> bool {
    permission_type.contains(&wanted.code())
}

/// A controller holds every permission code.
fn has_all_permissions(permission_type: &[i32]) -> bool {
    SnsNeuronPermissionType::ALL
        .into_iter()
        .all(|p| has_permission(permission_type, p))
}

fn is_hotkey_permission(permission: &NeuronPermission) -> bool {
    has_permission(&permission.permission_type, SnsNeuronPermissionType::Vote)
        && !has_all_permissions(&permission.permission_type)
}

fn permissions_of<'a>(
    neuron: &'a SnsNeuron,
    principal: &'a Principal,
) -> impl Iterator<Item = &'a NeuronPermission> {
    neuron
        .permissions
        .iter()
        .filter(move |p| p.principal.as_ref() == Some(principal))
}

#[must_use]
pub fn has_permissions(
    neuron: &SnsNeuron,
    identity: &Identity,
    permissions: &[SnsNeuronPermissionType],
) -> bool {
    let principal = identity.principal();

    permissions_of(neuron, &principal).any(|p| {
        permissions
            .iter()
            .all(|wanted| has_permission(&p.permission_type, *wanted))
    })
}

#[must_use]
pub fn can_identity_manage_hotkeys(neuron: &SnsNeuron, identity: &Identity) -> bool {
    has_permissions(neuron, identity, &[SnsNeuronPermissionType::Vote])
}

/// Principals (as text) holding voting rights without being controllers,
/// in permission-list order.
#[must_use]
pub fn get_sns_neuron_hotkeys(neuron: &SnsNeuron) -> Vec<String> {
    neuron
        .permissions
        .iter()
        .filter(|p| is_hotkey_permission(p))
        .filter_map(|p| p.principal.map(|principal| principal.to_text()))
        .collect()
}

#[must_use]
pub fn is_user_hotkey(neuron: &SnsNeuron, identity: &Identity) -> bool {
    let principal = identity.principal();

    permissions_of(neuron, &principal).any(is_hotkey_permission)
}

///
/// TESTS
///
