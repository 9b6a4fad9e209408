#![no_std]

multiversx_sc::imports!();

pub mod cache;
pub mod config;
pub mod exec;
pub mod factory;
pub mod oracle;
pub mod positions;
pub mod risk;
pub mod router;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait Controller:
    positions::account::PositionAccountModule
    + positions::deposit::PositionDepositModule
    + positions::withdraw::PositionWithdrawModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + positions::leverage::PositionLeverageModule
    + positions::transfer::PositionTransferModule
    + positions::liquidation::PositionLiquidationModule
    + exec::ExecModule
    + router::RouterModule
    + factory::FactoryModule
    + config::ConfigModule
    + views::ViewsModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + risk::RiskModule
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + common_math::SharedMathModule
    + common_math::codec::AmountCodecModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// # Arguments
    /// - `market_template`: source code every market ledger is deployed from.
    /// - `reference_asset`: asset all prices are quoted in.
    /// - `reference_decimals`: native decimals of the reference asset.
    /// - `twap_factory`: factory locating the TWAP pools.
    #[init]
    fn init(
        &self,
        market_template: ManagedAddress,
        reference_asset: EgldOrEsdtTokenIdentifier,
        reference_decimals: usize,
        twap_factory: ManagedAddress,
    ) {
        require!(
            reference_decimals <= common_constants::INTERNAL_DECIMALS,
            ERROR_INVALID_DECIMALS
        );

        self.market_template().set(&market_template);
        self.reference_asset().set(&reference_asset);
        self.reference_decimals().set(reference_decimals);
        self.twap_factory().set(&twap_factory);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Deposits the attached payment into sub-account `sub_account` of the caller.
    ///
    /// # Payment
    /// - One fungible payment of an activated asset.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self, sub_account: u8) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_active();
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        let account = SubAccount::new(self.blockchain().get_caller(), sub_account);

        let mut cache = Cache::new(self);
        self.process_deposit(&account, &asset, &amount, &mut cache)
    }

    /// Withdraws `amount` (native units) of `asset` to the caller.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        sub_account: u8,
        asset: EgldOrEsdtTokenIdentifier,
        amount: AmountSpec<Self::Api>,
    ) -> BigUint {
        self.require_active();
        let caller = self.blockchain().get_caller();
        let account = SubAccount::new(caller.clone(), sub_account);

        let mut cache = Cache::new(self);
        self.process_withdraw(&account, &asset, amount, &caller, &mut cache)
    }

    #[endpoint(borrow)]
    fn borrow(&self, sub_account: u8, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.require_active();
        let caller = self.blockchain().get_caller();
        let account = SubAccount::new(caller.clone(), sub_account);

        let mut cache = Cache::new(self);
        self.process_borrow(&account, &asset, &amount, &caller, &mut cache);
    }

    /// Repays debt of sub-account `sub_account` with the attached payment.
    /// `Max` repays everything owed; the unused payment goes back to the caller.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self, sub_account: u8, amount: AmountSpec<Self::Api>) -> BigUint {
        self.require_active();
        let (asset, paid) = self.call_value().egld_or_single_fungible_esdt();
        let caller = self.blockchain().get_caller();
        let account = SubAccount::new(caller.clone(), sub_account);

        let mut cache = Cache::new(self);
        self.process_repay(&account, &asset, amount, &paid, &caller, &mut cache)
    }

    #[endpoint(mint)]
    fn mint(&self, sub_account: u8, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.require_active();
        let account = SubAccount::new(self.blockchain().get_caller(), sub_account);

        let mut cache = Cache::new(self);
        self.process_mint(&account, &asset, &amount, &mut cache);
    }

    #[endpoint(burn)]
    fn burn(
        &self,
        sub_account: u8,
        asset: EgldOrEsdtTokenIdentifier,
        amount: AmountSpec<Self::Api>,
    ) -> BigUint {
        self.require_active();
        let account = SubAccount::new(self.blockchain().get_caller(), sub_account);

        let mut cache = Cache::new(self);
        self.process_burn(&account, &asset, amount, &mut cache)
    }

    #[endpoint(transferBalance)]
    fn transfer_balance(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        from: SubAccount<Self::Api>,
        to: SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
    ) {
        self.require_active();
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new(self);
        self.process_transfer_balance(&caller, &asset, &from, &to, amount, &mut cache);
    }

    #[endpoint(transferDebt)]
    fn transfer_debt(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        from: SubAccount<Self::Api>,
        to: SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
    ) {
        self.require_active();
        let caller = self.blockchain().get_caller();

        let mut cache = Cache::new(self);
        self.process_transfer_debt(&caller, &asset, &from, &to, amount, &mut cache);
    }

    /// Lets `spender` move up to `amount` (native) of the balance of
    /// sub-account `sub_account`.
    #[endpoint(approve)]
    fn approve(
        &self,
        sub_account: u8,
        spender: SubAccount<Self::Api>,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        self.require_active();
        let owner = SubAccount::new(self.blockchain().get_caller(), sub_account);

        let mut cache = Cache::new(self);
        self.process_approve(&owner, &spender, &asset, &amount, false, &mut cache);
    }

    /// Lets `spender` move up to `amount` (native) of debt onto sub-account
    /// `sub_account`.
    #[endpoint(approveDebt)]
    fn approve_debt(
        &self,
        sub_account: u8,
        spender: SubAccount<Self::Api>,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        self.require_active();
        let owner = SubAccount::new(self.blockchain().get_caller(), sub_account);

        let mut cache = Cache::new(self);
        self.process_approve(&owner, &spender, &asset, &amount, true, &mut cache);
    }

    #[endpoint(enterMarket)]
    fn enter_market(&self, sub_account: u8, asset: EgldOrEsdtTokenIdentifier) {
        self.require_active();
        let account = SubAccount::new(self.blockchain().get_caller(), sub_account);

        let mut cache = Cache::new(self);
        self.process_enter_market(&account, &asset, &mut cache);
    }

    #[endpoint(exitMarket)]
    fn exit_market(&self, sub_account: u8, asset: EgldOrEsdtTokenIdentifier) {
        self.require_active();
        let account = SubAccount::new(self.blockchain().get_caller(), sub_account);

        let mut cache = Cache::new(self);
        self.process_exit_market(&account, &asset, &mut cache);
    }

    /// Liquidates `violator` into sub-account `sub_account` of the caller.
    ///
    /// # Arguments
    /// - `repay`: debt of `underlying` to take over, native units, or `Max`.
    /// - `min_yield`: least `collateral` (native units) accepted in return.
    #[endpoint(liquidate)]
    fn liquidate(
        &self,
        sub_account: u8,
        violator: SubAccount<Self::Api>,
        underlying: EgldOrEsdtTokenIdentifier,
        collateral: EgldOrEsdtTokenIdentifier,
        repay: AmountSpec<Self::Api>,
        min_yield: BigUint,
    ) {
        self.require_active();
        let liquidator = SubAccount::new(self.blockchain().get_caller(), sub_account);

        let mut cache = Cache::new(self);
        self.process_liquidation(
            &liquidator,
            &violator,
            &underlying,
            &collateral,
            &repay,
            &min_yield,
            &mut cache,
        );
    }
}
