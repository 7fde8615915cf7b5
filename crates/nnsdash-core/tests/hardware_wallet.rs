use futures::executor::block_on;
use nnsdash_core::{
    Error,
    api::{ApiError, LedgerAppVersion, LedgerError, LedgerIdentity},
    services::hardware_wallet::{
        LedgerConnectionState, assert_ledger_version, connect_to_hardware_wallet,
        get_ledger_identity, list_neurons_hardware_wallet, register_hardware_wallet,
        show_address_and_pub_key_on_hardware_wallet,
    },
    types::{NeuronInfo, NeuronState},
    utils::account_identifier::principal_to_account_identifier,
};
use nnsdash_testkit::{
    Fake,
    fixtures::{TestEnv, mock_account_details},
    ledger::MockLedgerIdentity,
};
use std::rc::Rc;

fn device_identifier(env: &TestEnv) -> String {
    principal_to_account_identifier(&env.ledger_identity.principal(), None)
}

//
// connect
//

#[test]
fn connect_reports_connecting_then_connected() {
    let env = TestEnv::new();
    let mut states = Vec::new();

    block_on(connect_to_hardware_wallet(&env, |conn| {
        states.push((conn.state, conn.identity.map(|i| i.principal())));
    }));

    assert_eq!(
        states,
        vec![
            (LedgerConnectionState::Connecting, None),
            (LedgerConnectionState::Connected, Some(Fake::principal(500))),
        ]
    );
    assert!(env.toast_texts().is_empty());
}

#[test]
fn connect_failure_toasts_the_keyed_error() {
    let env = TestEnv::new();
    env.hardware_wallet
        .set_default(Err(LedgerError::key("error__ledger.please_open")));
    let mut states = Vec::new();

    block_on(connect_to_hardware_wallet(&env, |conn| states.push(conn.state)));

    assert_eq!(
        states,
        vec![LedgerConnectionState::Connecting, LedgerConnectionState::NotConnected]
    );
    assert_eq!(
        env.toast_texts(),
        vec!["Please open the Internet Computer app on your hardware wallet and try again.".to_string()]
    );
}

#[test]
fn connect_transport_error_uses_fallback_label() {
    let env = TestEnv::new();
    env.hardware_wallet
        .set_default(Err(LedgerError::Transport("usb reset".to_string())));

    block_on(connect_to_hardware_wallet(&env, |_| {}));

    assert_eq!(
        env.toast_texts(),
        vec![
            "Something unexpected happened with your hardware wallet. device transport error: usb reset"
                .to_string()
        ]
    );
}

//
// version
//

#[test]
fn version_below_minimum_is_rejected() {
    let env = TestEnv::new();
    let old = MockLedgerIdentity::with_version(Fake::principal(1), LedgerAppVersion::new(2, 0, 5));

    let err = block_on(assert_ledger_version(&env, &old, "2.0.6")).unwrap_err();

    assert_eq!(
        err,
        LedgerError::Message(
            "Your hardware wallet app version 2.0.5 is not supported. Please upgrade to at least 2.0.6."
                .to_string()
        )
    );
}

#[test]
fn version_at_or_above_minimum_passes() {
    let env = TestEnv::new();

    for (major, minor, patch) in [(2, 0, 6), (2, 1, 0), (3, 0, 0)] {
        let device = MockLedgerIdentity::with_version(
            Fake::principal(1),
            LedgerAppVersion::new(major, minor, patch),
        );

        assert!(block_on(assert_ledger_version(&env, &device, "2.0.6")).is_ok());
    }
}

#[test]
fn outdated_device_does_not_connect() {
    let env = TestEnv::new();
    env.hardware_wallet.push(Ok(Rc::new(MockLedgerIdentity::with_version(
        Fake::principal(500),
        LedgerAppVersion::new(1, 9, 9),
    ))));
    let mut last = None;

    block_on(connect_to_hardware_wallet(&env, |conn| last = Some(conn.state)));

    assert_eq!(last, Some(LedgerConnectionState::NotConnected));
    assert!(env.toast_texts()[0].contains("1.9.9 is not supported"));
}

//
// identity
//

#[test]
fn ledger_identity_is_cached_per_identifier() {
    let env = TestEnv::new();
    let identifier = device_identifier(&env);

    let first = block_on(get_ledger_identity(&env, &identifier)).unwrap();
    let second = block_on(get_ledger_identity(&env, &identifier)).unwrap();

    assert_eq!(first.principal(), second.principal());
    assert_eq!(env.hardware_wallet.created.get(), 1);

    env.clear_ledger_identities();
    block_on(get_ledger_identity(&env, &identifier)).unwrap();
    assert_eq!(env.hardware_wallet.created.get(), 2);
}

#[test]
fn mismatched_device_is_rejected() {
    let env = TestEnv::new();
    let expected = principal_to_account_identifier(&Fake::principal(9), None);

    let err = match block_on(get_ledger_identity(&env, &expected)) {
        Err(err) => err,
        Ok(_) => panic!("mismatched identity accepted"),
    };

    let message = format!(
        "Wallet account identifier doesn't match. Expected {expected}, received {}.",
        device_identifier(&env)
    );
    assert_eq!(err, Error::Ledger(LedgerError::Message(message)));

    // not cached, the next request asks the device again
    let _ = block_on(get_ledger_identity(&env, &expected));
    assert_eq!(env.hardware_wallet.created.get(), 2);
}

//
// register
//

#[test]
fn register_requires_a_name() {
    let env = TestEnv::new();
    let device: Rc<dyn LedgerIdentity> = env.ledger_identity.clone();

    block_on(register_hardware_wallet(&env, Some("  "), Some(device))).unwrap();

    assert_eq!(env.toast_texts(), vec!["The hardware wallet needs a name.".to_string()]);
    assert!(env.nns_dapp.registered.borrow().is_empty());
}

#[test]
fn register_requires_a_device() {
    let env = TestEnv::new();

    block_on(register_hardware_wallet(&env, Some("nano"), None)).unwrap();

    assert_eq!(
        env.toast_texts(),
        vec!["No hardware wallet identity is connected.".to_string()]
    );
}

#[test]
fn register_without_sign_in_fails() {
    let env = TestEnv::new();
    env.stores().auth.sign_out();
    let device: Rc<dyn LedgerIdentity> = env.ledger_identity.clone();

    let result = block_on(register_hardware_wallet(&env, Some("nano"), Some(device)));

    assert_eq!(result, Err(Error::NoIdentity));
    assert_eq!(
        env.toast_texts(),
        vec!["No identity found. Please sign in again.".to_string()]
    );
    assert!(env.nns_dapp.registered.borrow().is_empty());
}

#[test]
fn register_attaches_and_reloads_accounts() {
    let env = TestEnv::new();
    let owner = TestEnv::identity().principal();
    env.nns_dapp
        .accounts
        .always(Ok(mock_account_details(owner, Fake::principal(500))));
    env.ledger
        .balances
        .of(env.config().network.icp_ledger_canister_id)
        .always(Ok(1));
    let device: Rc<dyn LedgerIdentity> = env.ledger_identity.clone();

    block_on(register_hardware_wallet(&env, Some("nano"), Some(device))).unwrap();

    assert_eq!(
        env.nns_dapp.registered.borrow().as_slice(),
        &[(TestEnv::identity(), "nano".to_string(), Fake::principal(500))]
    );
    let accounts = env.stores().accounts.universe(&env.nns_universe().id).unwrap();
    assert_eq!(accounts.accounts.len(), 3);
    assert!(env.toast_texts().is_empty());
}

#[test]
fn register_failure_is_toasted() {
    let env = TestEnv::new();
    *env.nns_dapp.register_reply.borrow_mut() = Some(ApiError::new("limit reached").into());
    let device: Rc<dyn LedgerIdentity> = env.ledger_identity.clone();

    block_on(register_hardware_wallet(&env, Some("nano"), Some(device))).unwrap();

    assert_eq!(
        env.toast_texts(),
        vec!["Sorry, the hardware wallet could not be attached. limit reached".to_string()]
    );
    assert!(env.nns_dapp.accounts.calls().is_empty());
}

//
// device actions
//

#[test]
fn show_address_reaches_the_device() {
    let env = TestEnv::new();

    block_on(show_address_and_pub_key_on_hardware_wallet(&env));

    assert_eq!(env.ledger_identity.shown.get(), 1);
    assert!(env.toast_texts().is_empty());
}

#[test]
fn show_address_errors_are_toasted() {
    let env = TestEnv::new();
    *env.ledger_identity.show_error.borrow_mut() =
        Some(LedgerError::Message("rejected on device".to_string()));

    block_on(show_address_and_pub_key_on_hardware_wallet(&env));

    assert_eq!(
        env.toast_texts(),
        vec!["Unexpected response from the hardware wallet. rejected on device".to_string()]
    );
}

#[test]
fn list_neurons_uses_the_device_principal() {
    let env = TestEnv::new();
    let neuron = NeuronInfo {
        neuron_id: 7,
        state: NeuronState::Locked,
        dissolve_delay_seconds: 31_557_600,
        stake_e8s: 100_000_000,
        created_timestamp_seconds: 1_600_000_000,
    };
    env.nns_governance.neurons.always(Ok(vec![neuron.clone()]));

    let listed = block_on(list_neurons_hardware_wallet(&env));

    assert_eq!(listed.neurons, vec![neuron]);
    assert_eq!(listed.err, None);

    let calls = env.nns_governance.neurons.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].certified);
    assert_eq!(calls[0].identity.principal(), Fake::principal(500));
}

#[test]
fn list_neurons_failure_is_returned_and_toasted() {
    let env = TestEnv::new();
    env.nns_governance
        .neurons
        .always(Err(ApiError::new("governance down").into()));

    let listed = block_on(list_neurons_hardware_wallet(&env));

    assert!(listed.neurons.is_empty());
    assert!(listed.err.is_some());
    assert_eq!(
        env.toast_texts(),
        vec!["Something unexpected happened with your hardware wallet. governance down".to_string()]
    );
}
