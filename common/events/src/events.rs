#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("market_activated")]
    fn market_activated_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] market: &ManagedAddress,
        #[indexed] decimals: usize,
    );

    #[event("market_upgraded")]
    fn market_upgraded_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] market: &ManagedAddress,
    );

    // Emitted by the ledger after every state changing call
    #[event("market_state")]
    fn market_state_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] timestamp: u64,
        state: &MarketState<Self::Api>,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] account: &SubAccount<Self::Api>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] scaled: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] account: &SubAccount<Self::Api>,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] scaled: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] account: &SubAccount<Self::Api>,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] account: &SubAccount<Self::Api>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("mint")]
    fn mint_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] account: &SubAccount<Self::Api>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("burn")]
    fn burn_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] account: &SubAccount<Self::Api>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("transfer_balance")]
    fn transfer_balance_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] from: &SubAccount<Self::Api>,
        #[indexed] to: &SubAccount<Self::Api>,
        #[indexed] scaled: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("transfer_debt")]
    fn transfer_debt_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] from: &SubAccount<Self::Api>,
        #[indexed] to: &SubAccount<Self::Api>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] owner: &SubAccount<Self::Api>,
        #[indexed] spender: &SubAccount<Self::Api>,
        #[indexed] is_debt: bool,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("reserves_converted")]
    fn reserves_converted_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] recipient: &SubAccount<Self::Api>,
        #[indexed] scaled: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("enter_market")]
    fn enter_market_event(
        &self,
        #[indexed] account: &SubAccount<Self::Api>,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
    );

    #[event("exit_market")]
    fn exit_market_event(
        &self,
        #[indexed] account: &SubAccount<Self::Api>,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
    );

    #[event("liquidation")]
    fn liquidation_event(
        &self,
        #[indexed] violator: &SubAccount<Self::Api>,
        #[indexed] liquidator: &SubAccount<Self::Api>,
        #[indexed] underlying: &EgldOrEsdtTokenIdentifier,
        #[indexed] collateral: &EgldOrEsdtTokenIdentifier,
        #[indexed] repay: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] yield_amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("asset_config")]
    fn asset_config_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        config: &AssetConfig<Self::Api>,
    );

    #[event("price_feed")]
    fn price_feed_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        config: &PriceFeedConfig<Self::Api>,
    );

    #[event("override_config")]
    fn override_event(
        &self,
        #[indexed] liability: &EgldOrEsdtTokenIdentifier,
        #[indexed] collateral: &EgldOrEsdtTokenIdentifier,
        config: &OverrideConfig<Self::Api>,
    );

    #[event("interest_rate_model")]
    fn interest_rate_model_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        model: &InterestRateModel<Self::Api>,
    );

    #[event("reserve_fee")]
    fn reserve_fee_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] fee: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("twap_factory")]
    fn twap_factory_event(&self, #[indexed] factory: &ManagedAddress);

    #[event("fallback_exemption")]
    fn fallback_exemption_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] exempt: bool,
    );

    #[event("batch_item_failed")]
    fn batch_item_failed_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] index: usize,
        error: &ManagedBuffer,
    );
}
