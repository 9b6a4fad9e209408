use common_structs::{
    AssetConfig, MarketState, OverrideConfig, PriceFeedConfig, SubAccount, UserDebt,
};
multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Code source every market ledger is deployed from.
    #[view(getMarketTemplate)]
    #[storage_mapper("market_template")]
    fn market_template(&self) -> SingleValueMapper<ManagedAddress>;

    /// Asset every price is quoted in.
    #[view(getReferenceAsset)]
    #[storage_mapper("reference_asset")]
    fn reference_asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getReferenceDecimals)]
    #[storage_mapper("reference_decimals")]
    fn reference_decimals(&self) -> SingleValueMapper<usize>;

    /// Factory resolving `(asset, reference, fee)` to a concentrated liquidity pool.
    #[view(getTwapFactory)]
    #[storage_mapper("twap_factory")]
    fn twap_factory(&self) -> SingleValueMapper<ManagedAddress>;

    /// Ledger deployed for an asset.
    #[view(getMarketAddress)]
    #[storage_mapper("markets")]
    fn markets(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<ManagedAddress>;

    /// Inverse of `markets`.
    #[view(getMarketAsset)]
    #[storage_mapper("market_assets")]
    fn market_assets(&self, market: &ManagedAddress) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getActivatedAssets)]
    #[storage_mapper("activated_assets")]
    fn activated_assets(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Ledgers deployed by this controller.
    #[view(getTrustedMarkets)]
    #[storage_mapper("trusted_markets")]
    fn trusted_markets(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getAssetConfig)]
    #[storage_mapper("asset_config")]
    fn asset_config(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<AssetConfig<Self::Api>>;

    #[view(getPriceFeed)]
    #[storage_mapper("price_feed")]
    fn price_feed(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<PriceFeedConfig<Self::Api>>;

    /// Assets allowed to use a feed without a fallback pool.
    #[view(isFallbackExempt)]
    #[storage_mapper("fallback_exempt")]
    fn fallback_exempt(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<bool>;

    #[view(getOverride)]
    #[storage_mapper("override_config")]
    fn override_config(
        &self,
        liability: &EgldOrEsdtTokenIdentifier,
        collateral: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<OverrideConfig<Self::Api>>;

    /// Collaterals with an enabled override for a liability.
    #[view(getOverrideCollaterals)]
    #[storage_mapper("override_collaterals")]
    fn override_collaterals(
        &self,
        liability: &EgldOrEsdtTokenIdentifier,
    ) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Markets counted by the risk engine for a sub-account.
    #[storage_mapper("entered_markets")]
    fn entered_markets(
        &self,
        account: &SubAccount<Self::Api>,
    ) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    // Ledger storage, read in place

    #[storage_mapper_from_address("market_state")]
    fn ledger_market_state(
        &self,
        market: ManagedAddress,
    ) -> SingleValueMapper<MarketState<Self::Api>, ManagedAddress>;

    /// Scaled balance of a sub-account, WAD.
    #[storage_mapper_from_address("balance")]
    fn ledger_balance(
        &self,
        market: ManagedAddress,
        account: SubAccount<Self::Api>,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("debt")]
    fn ledger_debt(
        &self,
        market: ManagedAddress,
        account: SubAccount<Self::Api>,
    ) -> SingleValueMapper<UserDebt<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("allowance")]
    fn ledger_allowance(
        &self,
        market: ManagedAddress,
        owner: SubAccount<Self::Api>,
        spender: SubAccount<Self::Api>,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;

    #[storage_mapper_from_address("debt_allowance")]
    fn ledger_debt_allowance(
        &self,
        market: ManagedAddress,
        owner: SubAccount<Self::Api>,
        spender: SubAccount<Self::Api>,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>, ManagedAddress>;
}
