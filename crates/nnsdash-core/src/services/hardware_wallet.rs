//! Hardware wallet flows.

use crate::{
    AppContext, Error,
    api::{LedgerError, LedgerIdentity, RequestContext},
    log,
    log::Topic,
    services::{
        icp_accounts::sync_icp_accounts,
        require_identity,
        toasts::{ErrorToast, toasts_error},
    },
    sync::Strategy,
    types::{Identity, NeuronInfo, Substitutions},
    utils::{
        account_identifier::principal_to_account_identifier,
        version::{parse_version, smaller_version},
    },
};
use derive_more::Display;
use std::{fmt, rc::Rc};

///
/// LedgerConnectionState
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum LedgerConnectionState {
    Connected,
    Connecting,
    NotConnected,
}

///
/// LedgerConnection
/// Progress reported while connecting.
///

#[derive(Clone)]
pub struct LedgerConnection {
    pub state: LedgerConnectionState,
    pub identity: Option<Rc<dyn LedgerIdentity>>,
}

impl fmt::Debug for LedgerConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedgerConnection")
            .field("state", &self.state)
            .field("identity", &self.identity.as_ref().map(|i| i.principal()))
            .finish()
    }
}

///
/// HardwareWalletNeurons
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HardwareWalletNeurons {
    pub neurons: Vec<NeuronInfo>,
    pub err: Option<Error>,
}

fn substitutions(pairs: [(&str, String); 2]) -> Substitutions {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// A keyed ledger error shows its own label, anything else the fallback.
fn toast_ledger_error(ctx: &AppContext, err: &Error, fallback_label_key: &str) {
    let toast = match err {
        Error::Ledger(LedgerError::Key {
            label_key,
            substitutions,
        }) => ErrorToast {
            label_key: label_key.clone(),
            err: None,
            substitutions: substitutions.clone(),
        },
        _ => ErrorToast::new(fallback_label_key).with_err(err),
    };

    toasts_error(ctx, toast);
}

async fn create_identity(ctx: &AppContext) -> Result<Rc<dyn LedgerIdentity>, Error> {
    let identity = ctx.apis().hardware_wallet.create().await?;
    assert_ledger_version(ctx, identity.as_ref(), &ctx.config().ledger.min_app_version).await?;

    Ok(identity)
}

///
/// assert_ledger_version
/// Fails when the device app is older than `min_version`.
///

pub async fn assert_ledger_version(
    ctx: &AppContext,
    identity: &dyn LedgerIdentity,
    min_version: &str,
) -> Result<(), LedgerError> {
    let current = identity.version().await?;
    let min = parse_version(min_version)
        .ok_or_else(|| LedgerError::Message(format!("invalid version '{min_version}'")))?;

    if smaller_version((current.major, current.minor, current.patch), min) {
        let text = ctx.i18n().translate_with(
            "error__ledger.version_not_supported",
            &substitutions([
                ("$minVersion", min_version.to_string()),
                ("$currentVersion", current.to_string()),
            ]),
        );

        return Err(LedgerError::Message(text));
    }

    Ok(())
}

///
/// connect_to_hardware_wallet
///
/// Reports `Connecting`, then `Connected` with the identity or
/// `NotConnected` plus an error toast.
///

pub async fn connect_to_hardware_wallet(ctx: &AppContext, mut callback: impl FnMut(LedgerConnection)) {
    callback(LedgerConnection {
        state: LedgerConnectionState::Connecting,
        identity: None,
    });

    match create_identity(ctx).await {
        Ok(identity) => {
            log!(Topic::HardwareWallet, Ok, "connected {}", identity.principal());
            callback(LedgerConnection {
                state: LedgerConnectionState::Connected,
                identity: Some(identity),
            });
        }
        Err(err) => {
            callback(LedgerConnection {
                state: LedgerConnectionState::NotConnected,
                identity: None,
            });
            toast_ledger_error(ctx, &err, "error__ledger.unexpected");
        }
    }
}

///
/// get_ledger_identity
///
/// The device identity for the hardware wallet account `identifier`. The
/// device must derive that very account; identities are cached per
/// identifier.
///

pub async fn get_ledger_identity(
    ctx: &AppContext,
    identifier: &str,
) -> Result<Rc<dyn LedgerIdentity>, Error> {
    if let Some(identity) = ctx.ledger_identities().borrow().get(identifier) {
        return Ok(Rc::clone(identity));
    }

    let identity = create_identity(ctx).await?;
    let ledger_identifier = principal_to_account_identifier(&identity.principal(), None);

    if ledger_identifier != identifier {
        let text = ctx.i18n().translate_with(
            "error__ledger.incorrect_identifier",
            &substitutions([
                ("$identifier", identifier.to_string()),
                ("$ledgerIdentifier", ledger_identifier),
            ]),
        );

        return Err(LedgerError::Message(text).into());
    }

    ctx.ledger_identities()
        .borrow_mut()
        .insert(identifier.to_string(), Rc::clone(&identity));

    Ok(identity)
}

///
/// register_hardware_wallet
///
/// Attaches the device account to the user's record under `name` and
/// reloads the home network accounts. Missing input is a toast, not an error.
///

pub async fn register_hardware_wallet(
    ctx: &AppContext,
    name: Option<&str>,
    ledger_identity: Option<Rc<dyn LedgerIdentity>>,
) -> Result<(), Error> {
    let Some(name) = name.filter(|name| !name.trim().is_empty()) else {
        toasts_error(ctx, ErrorToast::new("error__attach_wallet.no_name"));
        return Ok(());
    };

    let Some(ledger_identity) = ledger_identity else {
        toasts_error(ctx, ErrorToast::new("error__attach_wallet.no_identity"));
        return Ok(());
    };

    let identity = require_identity(ctx)?;

    let registered = ctx
        .apis()
        .nns_dapp
        .register_hardware_wallet(identity, name.to_string(), ledger_identity.principal())
        .await;

    if let Err(err) = registered {
        toasts_error(ctx, ErrorToast::new("error__attach_wallet.unexpected").with_err(&err));
        return Ok(());
    }

    log!(Topic::HardwareWallet, Ok, "attached hardware wallet '{name}'");

    if let Err(err) = sync_icp_accounts(ctx, Strategy::QueryAndUpdate).await {
        log!(Topic::HardwareWallet, Debug, "accounts sync after attach failed: {err}");
    }

    Ok(())
}

/// Asks the device to display its address and public key.
pub async fn show_address_and_pub_key_on_hardware_wallet(ctx: &AppContext) {
    let shown = async {
        let identity = create_identity(ctx).await?;
        identity.show_address_and_pub_key_on_device().await?;

        Ok::<_, Error>(())
    }
    .await;

    if let Err(err) = shown {
        toast_ledger_error(ctx, &err, "error__ledger.unexpected_wallet");
    }
}

///
/// list_neurons_hardware_wallet
/// Neurons controlled by the connected device, read with an update call.
///

pub async fn list_neurons_hardware_wallet(ctx: &AppContext) -> HardwareWalletNeurons {
    let listed = async {
        let identity = create_identity(ctx).await?;
        let req = RequestContext::update(Identity::new(identity.principal()));

        ctx.apis().nns_governance.query_neurons(req).await
    }
    .await;

    match listed {
        Ok(neurons) => HardwareWalletNeurons { neurons, err: None },
        Err(err) => {
            toast_ledger_error(ctx, &err, "error__ledger.unexpected");
            HardwareWalletNeurons {
                neurons: Vec::new(),
                err: Some(err),
            }
        }
    }
}
