#![no_std]

multiversx_sc::imports!();

/// Stand-in for the security token, its core and a resolution target.
#[multiversx_sc::contract]
pub trait TokenCoreMock {
    #[init]
    fn init(&self) {}

    // ========================================================
    // Test setup
    // ========================================================

    #[endpoint(setBalance)]
    fn set_balance(&self, holder: ManagedAddress, amount: BigUint) {
        let previous = self.balances(&holder).get();
        self.supply().update(|supply| {
            *supply -= &previous;
            *supply += &amount;
        });
        self.balances(&holder).set(&amount);
    }

    #[endpoint(setProxyOperator)]
    fn set_proxy_operator(&self, operator: ManagedAddress, enabled: bool) {
        self.proxy_operators(&operator).set(enabled);
    }

    #[endpoint(setSelfManaged)]
    fn set_self_managed(&self, holder: ManagedAddress, enabled: bool) {
        self.self_managed(&holder).set(enabled);
    }

    #[endpoint(setLockRejected)]
    fn set_lock_rejected(&self, rejected: bool) {
        self.lock_rejected().set(rejected);
    }

    // ========================================================
    // Token
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, holder: ManagedAddress) -> BigUint {
        self.balances(&holder).get()
    }

    #[view(totalSupply)]
    fn total_supply(&self) -> BigUint {
        self.supply().get()
    }

    // ========================================================
    // Core
    // ========================================================

    #[view(isProxyOperator)]
    fn is_proxy_operator(&self, operator: ManagedAddress, _token: ManagedAddress) -> bool {
        self.proxy_operators(&operator).get()
    }

    #[view(isSelfManaged)]
    fn is_self_managed(&self, holder: ManagedAddress) -> bool {
        self.self_managed(&holder).get()
    }

    #[endpoint(defineLock)]
    fn define_lock(
        &self,
        _scope: ManagedAddress,
        _sender: ManagedAddress,
        _receiver: ManagedAddress,
        start_at: u64,
        end_at: u64,
    ) -> bool {
        if self.lock_rejected().get() {
            return false;
        }
        self.lock_window().set((start_at, end_at));
        true
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.blockchain().get_owner_address()
    }

    // ========================================================
    // Resolution target
    // ========================================================

    #[endpoint(recordResolution)]
    fn record_resolution(&self, value: u64) {
        self.recorded_resolution().set(value);
    }

    #[endpoint(rejectResolution)]
    fn reject_resolution(&self) {
        sc_panic!("resolution rejected");
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("balances")]
    fn balances(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("supply")]
    fn supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("proxyOperators")]
    fn proxy_operators(&self, operator: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("selfManaged")]
    fn self_managed(&self, holder: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("lockRejected")]
    fn lock_rejected(&self) -> SingleValueMapper<bool>;

    #[view(getLockWindow)]
    #[storage_mapper("lockWindow")]
    fn lock_window(&self) -> SingleValueMapper<(u64, u64)>;

    #[view(getRecordedResolution)]
    #[storage_mapper("recordedResolution")]
    fn recorded_resolution(&self) -> SingleValueMapper<u64>;
}
