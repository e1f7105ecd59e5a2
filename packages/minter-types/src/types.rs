use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cosmwasm_std::Deps;
use cosmwasm_std::StdError;

#[cw_serde]
pub struct AuthDetails {
    pub admin: Addr,
    pub payment_collector: Addr,
}

impl AuthDetails {
    pub fn validate(&self, deps: &Deps) -> Result<(), StdError> {
        deps.api.addr_validate(self.admin.as_ref())?;
        deps.api.addr_validate(self.payment_collector.as_ref())?;
        Ok(())
    }
}

#[cw_serde]
pub struct CollectionCaps {
    // Inventory capacity, 0 means unbounded
    pub collection_maximum: u64,
    // Public allowance per address, 0 means unbounded
    pub public_mint_limit: u64,
}
