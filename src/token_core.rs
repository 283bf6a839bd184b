multiversx_sc::imports!();

use crate::constants::ANY_ADDRESSES;
use crate::errors::TRANSFER_LOCK_REJECTED;
use crate::{core_proxy, ownable_proxy, token_proxy};

/// Calls into the token, its core and arbitrary ownable contracts.
#[multiversx_sc::module]
pub trait TokenCoreModule: crate::storage::StorageModule {
    fn token_balance_of(&self, holder: &ManagedAddress) -> BigUint {
        let token = self.token().get();
        self.tx()
            .to(&token)
            .typed(token_proxy::TokenProxy)
            .balance_of(holder.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn token_total_supply(&self) -> BigUint {
        let token = self.token().get();
        self.tx()
            .to(&token)
            .typed(token_proxy::TokenProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn is_token_operator(&self, address: &ManagedAddress) -> bool {
        let core = self.core().get();
        let token = self.token().get();
        self.tx()
            .to(&core)
            .typed(core_proxy::CoreProxy)
            .is_proxy_operator(address.clone(), token)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn is_self_managed(&self, holder: &ManagedAddress) -> bool {
        let core = self.core().get();
        self.tx()
            .to(&core)
            .typed(core_proxy::CoreProxy)
            .is_self_managed(holder.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Freezes every token transfer over `[start_at, end_at)`.
    fn lock_token_transfers(&self, start_at: u64, end_at: u64) {
        let core = self.core().get();
        let token = self.token().get();
        let any_address: ManagedAddress = ManagedAddress::new_from_bytes(&ANY_ADDRESSES);
        let locked: bool = self
            .tx()
            .to(&core)
            .typed(core_proxy::CoreProxy)
            .define_lock(token, any_address.clone(), any_address, start_at, end_at)
            .returns(ReturnsResult)
            .sync_call();
        require!(locked, TRANSFER_LOCK_REJECTED);
    }

    fn contract_owner(&self, contract: &ManagedAddress) -> ManagedAddress {
        self.tx()
            .to(contract)
            .typed(ownable_proxy::OwnableProxy)
            .get_owner()
            .returns(ReturnsResult)
            .sync_call()
    }
}
