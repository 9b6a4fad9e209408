multiversx_sc::imports!();

use common_constants::{
    PRICING_TYPE_CUSTOM, PRICING_TYPE_FEED, PRICING_TYPE_FORWARDED, PRICING_TYPE_PEGGED,
    PRICING_TYPE_TWAP,
};
use common_errors::{
    ERROR_FALLBACK_POOL_FEE_NOT_SPECIFIED, ERROR_FORWARD_TARGET_NOT_SPECIFIED,
    ERROR_PRICE_FEED_NOT_INITIALIZED, ERROR_UNKNOWN_PRICING_TYPE,
};
use common_structs::{
    AmountSpec, AssetConfig, InterestRateModel, OverrideConfig, PriceFeedConfig, PricingConfig,
    SubAccount,
};

use crate::{cache::Cache, storage, utils, validation};

/// Governance of the risk engine.
///
/// Every endpoint here is restricted to the owner. Risk parameters and price
/// sources live in controller storage; market parameters (reserve fee, rate
/// model, reserves) are pushed to the ledger of the asset, which emits its
/// own events for them.
///
/// # Pricing
/// A pricing configuration is validated when it is set, so that a lookup can
/// only fail on live data:
/// - `Twap` needs a pool fee tier.
/// - `Feed` and `Custom` need a complete feed record, and a fallback fee
///   tier unless the asset is exempted from having one.
/// - `Forwarded` needs an activated target other than the asset itself.
///
/// A forwarding chain longer than one hop is only rejected at lookup time,
/// since the target may be reconfigured after the forwarder.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + common_events::EventsModule
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Sets the risk parameters of an activated asset, keeping its pricing.
    ///
    /// # Arguments
    /// - `collateral_factor`: BPS, zero disables the asset as collateral.
    /// - `borrow_factor`: BPS, in `(0, 10000]`.
    /// - `borrow_isolated`: a borrow of the asset cannot sit next to other borrows.
    /// - `twap_window`: TWAP averaging period, seconds.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_ACTIVATED`
    /// - `ERROR_INVALID_FACTOR`
    #[only_owner]
    #[endpoint(setAssetConfig)]
    fn set_asset_config(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        collateral_factor: BigUint,
        borrow_factor: BigUint,
        borrow_isolated: bool,
        twap_window: u64,
    ) {
        self.require_market_activated(&asset);

        let mut config = self.asset_config(&asset).get();
        config.collateral_factor = self.validate_factor(&collateral_factor, true);
        config.borrow_factor = self.validate_factor(&borrow_factor, false);
        config.borrow_isolated = borrow_isolated;
        config.twap_window = twap_window;

        self.store_asset_config(&asset, &config);
    }

    /// Selects how `asset` is priced against the reference asset.
    ///
    /// # Arguments
    /// - `pricing_type`: 1 Pegged, 2 Twap, 3 Forwarded, 4 Feed, 5 Custom.
    /// - `pool_fee`: TWAP pool fee tier, the fallback tier for Feed and Custom.
    /// - `forward_target`: asset whose price is forwarded, Forwarded only.
    ///
    /// # Errors
    /// - `ERROR_UNKNOWN_PRICING_TYPE`
    /// - `ERROR_FALLBACK_POOL_FEE_NOT_SPECIFIED`
    /// - `ERROR_PRICE_FEED_NOT_INITIALIZED`
    /// - `ERROR_FORWARD_TARGET_NOT_SPECIFIED`
    /// - `ERROR_MARKET_NOT_ACTIVATED`: for the asset or the forward target.
    #[only_owner]
    #[endpoint(setPricingConfig)]
    fn set_pricing_config(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        pricing_type: u8,
        pool_fee: u32,
        forward_target: OptionalValue<EgldOrEsdtTokenIdentifier>,
    ) {
        self.require_market_activated(&asset);

        let pricing = self.build_pricing(&asset, pricing_type, pool_fee, forward_target);

        let mut config = self.asset_config(&asset).get();
        config.pricing = pricing;

        self.store_asset_config(&asset, &config);
    }

    fn build_pricing(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        pricing_type: u8,
        pool_fee: u32,
        forward_target: OptionalValue<EgldOrEsdtTokenIdentifier>,
    ) -> PricingConfig<Self::Api> {
        match pricing_type {
            PRICING_TYPE_PEGGED => PricingConfig::Pegged,
            PRICING_TYPE_TWAP => {
                require!(pool_fee > 0, ERROR_FALLBACK_POOL_FEE_NOT_SPECIFIED);
                PricingConfig::Twap { pool_fee }
            },
            PRICING_TYPE_FEED | PRICING_TYPE_CUSTOM => {
                let feed = self.price_feed(asset);
                require!(
                    !feed.is_empty() && feed.get().is_initialized(),
                    ERROR_PRICE_FEED_NOT_INITIALIZED
                );
                require!(
                    pool_fee > 0 || self.fallback_exempt(asset).get(),
                    ERROR_FALLBACK_POOL_FEE_NOT_SPECIFIED
                );

                if pricing_type == PRICING_TYPE_FEED {
                    PricingConfig::Feed {
                        fallback_pool_fee: pool_fee,
                    }
                } else {
                    PricingConfig::Custom {
                        fallback_pool_fee: pool_fee,
                    }
                }
            },
            PRICING_TYPE_FORWARDED => {
                let target = match forward_target.into_option() {
                    Some(target) if &target != asset => target,
                    _ => sc_panic!(ERROR_FORWARD_TARGET_NOT_SPECIFIED),
                };
                self.require_market_activated(&target);

                PricingConfig::Forwarded { target }
            },
            _ => sc_panic!(ERROR_UNKNOWN_PRICING_TYPE),
        }
    }

    fn store_asset_config(&self, asset: &EgldOrEsdtTokenIdentifier, config: &AssetConfig<Self::Api>) {
        self.asset_config(asset).set(config);
        self.asset_config_event(asset, config);
    }

    /// Attaches a push feed or custom adapter to `asset`.
    ///
    /// `params` packs `(decimals << 24) | timeout`, the timeout in seconds.
    /// An incomplete record is stored as is; pricing through it is refused
    /// until it is completed.
    #[only_owner]
    #[endpoint(setPriceFeed)]
    fn set_price_feed(&self, asset: EgldOrEsdtTokenIdentifier, address: ManagedAddress, params: u32) {
        self.require_market_activated(&asset);

        let config = PriceFeedConfig::from_packed(address, params);
        self.price_feed(&asset).set(&config);

        self.price_feed_event(&asset, &config);
    }

    /// Lets Feed and Custom pricing of `asset` go without a fallback pool.
    #[only_owner]
    #[endpoint(setFallbackExemption)]
    fn set_fallback_exemption(&self, asset: EgldOrEsdtTokenIdentifier, exempt: bool) {
        self.require_market_activated(&asset);

        self.fallback_exempt(&asset).set(exempt);
        self.fallback_exemption_event(&asset, exempt);
    }

    /// Sets the collateral factor (BPS) `collateral` gets when it backs
    /// `liability`. A disabled entry is kept but ignored.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_ACTIVATED`: for either asset.
    /// - `ERROR_INVALID_FACTOR`
    #[only_owner]
    #[endpoint(setOverride)]
    fn set_override(
        &self,
        liability: EgldOrEsdtTokenIdentifier,
        collateral: EgldOrEsdtTokenIdentifier,
        enabled: bool,
        collateral_factor: BigUint,
    ) {
        self.require_market_activated(&liability);
        self.require_market_activated(&collateral);

        let config = OverrideConfig {
            enabled,
            collateral_factor: self.validate_factor(&collateral_factor, true),
        };
        self.override_config(&liability, &collateral).set(&config);

        let mut collaterals = self.override_collaterals(&liability);
        if enabled {
            collaterals.insert(collateral.clone());
        } else {
            collaterals.swap_remove(&collateral);
        }

        self.override_event(&liability, &collateral, &config);
    }

    #[only_owner]
    #[endpoint(setTwapFactory)]
    fn set_twap_factory(&self, factory: ManagedAddress) {
        self.twap_factory().set(&factory);
        self.twap_factory_event(&factory);
    }

    /// Reserve fee of the market, BPS of the interest accrued.
    #[only_owner]
    #[endpoint(setReserveFee)]
    fn set_reserve_fee(&self, asset: EgldOrEsdtTokenIdentifier, fee: BigUint) {
        let mut cache = Cache::new(self);
        self.ledger_set_reserve_fee(&asset, &fee, &mut cache);
    }

    #[only_owner]
    #[endpoint(setInterestRateModel)]
    fn set_interest_rate_model(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        model: InterestRateModel<Self::Api>,
    ) {
        let mut cache = Cache::new(self);
        self.ledger_set_interest_rate_model(&asset, &model, &mut cache);
    }

    /// Credits reserves of the market above the locked initial amount to
    /// `recipient` as a regular balance.
    #[only_owner]
    #[endpoint(convertReserves)]
    fn convert_reserves(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        recipient: SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = Cache::new(self);
        self.ledger_convert_reserves(&asset, &recipient, amount, &mut cache)
    }
}
