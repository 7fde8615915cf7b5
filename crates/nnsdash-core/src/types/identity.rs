use candid::Principal;

///
/// Identity
///
/// The caller on whose behalf a canister call is made. Signing lives with the
/// agent collaborator; this crate only needs the principal.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Identity {
    principal: Principal,
}

impl Identity {
    #[must_use]
    pub const fn new(principal: Principal) -> Self {
        Self { principal }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::new(Principal::anonymous())
    }

    #[must_use]
    pub const fn principal(&self) -> Principal {
        self.principal
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.principal == Principal::anonymous()
    }
}

impl From<Principal> for Identity {
    fn from(principal: Principal) -> Self {
        Self::new(principal)
    }
}
