multiversx_sc::imports!();

use crate::errors::{NOT_A_CONTRACT, NOT_CONTRACT_OWNER};
use crate::types::Sponsor;

#[multiversx_sc::module]
pub trait SponsorsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::token_core::TokenCoreModule
{
    /// Lets `sponsor` vote on the caller's behalf until `until` (inclusive).
    #[endpoint(defineSponsor)]
    fn define_sponsor(&self, sponsor: ManagedAddress, until: u64) {
        let caller = self.blockchain().get_caller();
        self.store_sponsor(&caller, sponsor, until);
    }

    #[endpoint(defineContractSponsor)]
    fn define_contract_sponsor(&self, contract: ManagedAddress, sponsor: ManagedAddress, until: u64) {
        require!(self.blockchain().is_smart_contract(&contract), NOT_A_CONTRACT);
        let caller = self.blockchain().get_caller();
        require!(self.contract_owner(&contract) == caller, NOT_CONTRACT_OWNER);

        self.store_sponsor(&contract, sponsor, until);
    }

    #[view(getSponsorOf)]
    fn sponsor_of(&self, voter: ManagedAddress) -> MultiValue2<ManagedAddress, u64> {
        let mapper = self.sponsors(&voter);
        if mapper.is_empty() {
            return (ManagedAddress::zero(), 0u64).into();
        }
        let sponsor = mapper.get();
        (sponsor.address, sponsor.until).into()
    }

    fn is_active_sponsor(&self, voter: &ManagedAddress, candidate: &ManagedAddress, now: u64) -> bool {
        let mapper = self.sponsors(voter);
        if mapper.is_empty() {
            return false;
        }
        let sponsor = mapper.get();
        sponsor.address == *candidate && now <= sponsor.until
    }

    fn store_sponsor(&self, voter: &ManagedAddress, address: ManagedAddress, until: u64) {
        self.sponsor_defined_event(voter, &address, until);
        self.sponsors(voter).set(Sponsor { address, until });
    }
}
