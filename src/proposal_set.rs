multiversx_sc::derive_imports!();

use multiversx_sc::api::ManagedTypeApi;
use multiversx_sc::types::BigUint;

use crate::constants::MAX_PROPOSALS_PER_SESSION;

const WORD_BITS: usize = 64;
const WORDS: usize = 4;
const HALF_WORD_BITS: usize = 32;

/// Fixed 256-bit set of proposal ids. Proposal `i` maps to bit `i - 1`;
/// word 0 holds proposals 1..=64, word 3 holds proposals 193..=255.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default,
)]
pub struct ProposalSet {
    words: [u64; WORDS],
}

impl ProposalSet {
    pub const fn empty() -> Self {
        ProposalSet { words: [0; WORDS] }
    }

    pub const fn from_words(words: [u64; WORDS]) -> Self {
        ProposalSet { words }
    }

    /// Reads the integer form used on the wire, where bit `i - 1` selects
    /// proposal `i`. `None` if a bit above 256 is set.
    pub fn from_big_uint<M: ManagedTypeApi>(value: &BigUint<M>) -> Option<Self> {
        let half_mask = BigUint::<M>::from(u32::MAX);
        let mut rest = value.clone();
        let mut words = [0u64; WORDS];
        for word in words.iter_mut() {
            let low = (&rest & &half_mask).to_u64()?;
            rest >>= HALF_WORD_BITS;
            let high = (&rest & &half_mask).to_u64()?;
            rest >>= HALF_WORD_BITS;
            *word = (high << HALF_WORD_BITS) | low;
        }
        if rest == 0u64 {
            Some(ProposalSet { words })
        } else {
            None
        }
    }

    pub fn to_big_uint<M: ManagedTypeApi>(&self) -> BigUint<M> {
        let mut value = BigUint::zero();
        for word in self.words.iter().rev() {
            value <<= HALF_WORD_BITS;
            value += (*word >> HALF_WORD_BITS) as u32;
            value <<= HALF_WORD_BITS;
            value += *word as u32;
        }
        value
    }

    pub fn single(proposal_id: u8) -> Self {
        let mut set = Self::empty();
        set.insert(proposal_id);
        set
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    pub fn contains(&self, proposal_id: u8) -> bool {
        match position(proposal_id) {
            Some((word, bit)) => self.words[word] & (1u64 << bit) != 0,
            None => false,
        }
    }

    pub fn insert(&mut self, proposal_id: u8) {
        if let Some((word, bit)) = position(proposal_id) {
            self.words[word] |= 1u64 << bit;
        }
    }

    pub fn remove(&mut self, proposal_id: u8) {
        if let Some((word, bit)) = position(proposal_id) {
            self.words[word] &= !(1u64 << bit);
        }
    }

    pub fn intersection(&self, other: &ProposalSet) -> ProposalSet {
        let mut words = self.words;
        for (word, other_word) in words.iter_mut().zip(other.words.iter()) {
            *word &= *other_word;
        }
        ProposalSet { words }
    }

    /// True if no proposal above `proposals_count` is selected.
    pub fn is_within(&self, proposals_count: u8) -> bool {
        let count = proposals_count as usize;
        self.words.iter().enumerate().all(|(index, word)| {
            let low = index * WORD_BITS;
            if count >= low + WORD_BITS {
                true
            } else if count <= low {
                *word == 0
            } else {
                word >> (count - low) == 0
            }
        })
    }

    /// True if `proposal_id` is the only member of `group` in this set.
    /// An empty group places no constraint.
    pub fn selects_only_from_group(&self, group: &ProposalSet, proposal_id: u8) -> bool {
        group.is_empty() || self.intersection(group) == ProposalSet::single(proposal_id)
    }

    /// Selected ids in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=MAX_PROPOSALS_PER_SESSION).filter(move |proposal_id| self.contains(*proposal_id))
    }
}

fn position(proposal_id: u8) -> Option<(usize, usize)> {
    if proposal_id == 0 {
        return None;
    }
    let index = (proposal_id - 1) as usize;
    Some((index / WORD_BITS, index % WORD_BITS))
}
