#![no_std]

multiversx_sc::imports!();

pub mod cache;
pub mod ledger;
pub mod storage;
pub mod utils;
pub mod view;

use common_constants::{INITIAL_RESERVES, INTERNAL_DECIMALS};
use common_errors::{ERROR_INVALID_DECIMALS, ERROR_INVALID_RESERVE_FEE};
use common_structs::{InterestRateModel, MarketState};

pub use common_events::*;

/// Interest bearing ledger of a single asset.
///
/// Holds the market totals, the scaled balances and debts of every
/// sub-account and their allowances. Only the controller that deployed the
/// ledger may change it.
#[multiversx_sc::contract]
pub trait MarketLedger:
    storage::Storage
    + ledger::LedgerModule
    + utils::UtilsModule
    + view::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_math::codec::AmountCodecModule
    + common_rates::InterestRates
{
    /// Seeds the market with `INITIAL_RESERVES` of scaled supply owned by
    /// the reserves, so that `total_balances` never reaches zero.
    ///
    /// # Arguments
    /// - `asset`: token tracked by this ledger.
    /// - `decimals`: native decimals of `asset`, at most 18.
    /// - `reserve_fee`: share of interest minted to reserves, BPS.
    /// - `model`: initial interest rate model.
    #[init]
    fn init(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        decimals: usize,
        reserve_fee: BigUint,
        model: InterestRateModel<Self::Api>,
    ) {
        require!(decimals <= INTERNAL_DECIMALS, ERROR_INVALID_DECIMALS);
        let reserve_fee = self.to_decimal_bps(reserve_fee);
        require!(reserve_fee <= self.bps(), ERROR_INVALID_RESERVE_FEE);
        self.validate_interest_rate_model(&model);

        let now = self.blockchain().get_block_timestamp();
        let seed = self.to_decimal_wad(BigUint::from(INITIAL_RESERVES));

        self.controller().set(self.blockchain().get_caller());
        self.asset().set(&asset);
        self.market_state().set(MarketState {
            total_balances: seed.clone(),
            total_borrows: self.ray_zero(),
            pool_size: self.wad_zero(),
            reserve_balance: seed,
            interest_accumulator: self.ray(),
            interest_rate: self.ray_zero(),
            reserve_fee,
            last_update: now,
            decimals,
        });
        self.interest_rate_model().set(&model);
        self.reset_index_snapshot(&model, now);

        let mut cache = cache::Cache::new(self);
        self.update_interest_rate(&mut cache);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
