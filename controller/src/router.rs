multiversx_sc::imports!();

use common_constants::{
    BPS_PRECISION, DEFAULT_BORROW_FACTOR, DEFAULT_POOL_FEE, DEFAULT_TWAP_WINDOW, INTERNAL_DECIMALS,
};
use common_errors::{ERROR_INVALID_DECIMALS, ERROR_MARKET_ALREADY_ACTIVATED};
use common_structs::{AssetConfig, InterestRateModel, PricingConfig};

use crate::{factory, storage, validation};

#[multiversx_sc::module]
pub trait RouterModule:
    storage::Storage
    + common_events::EventsModule
    + factory::FactoryModule
    + validation::ValidationModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Deploys the ledger of `asset` and registers it as a trusted market.
    ///
    /// The asset starts with a zero collateral factor, the default borrow
    /// factor, isolated borrowing and TWAP pricing on the default fee tier.
    ///
    /// # Arguments
    /// - `decimals`: native decimals of the asset, at most 18.
    /// - `reserve_fee`: BPS share of the interest kept as reserves.
    /// - `model`: initial interest rate model.
    ///
    /// # Errors
    /// - `ERROR_MARKET_ALREADY_ACTIVATED`
    /// - `ERROR_INVALID_DECIMALS`
    /// - `ERROR_TEMPLATE_EMPTY`
    #[only_owner]
    #[endpoint(activateMarket)]
    fn activate_market(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        decimals: usize,
        reserve_fee: BigUint,
        model: InterestRateModel<Self::Api>,
    ) -> ManagedAddress {
        require!(
            self.markets(&asset).is_empty(),
            ERROR_MARKET_ALREADY_ACTIVATED
        );
        require!(decimals <= INTERNAL_DECIMALS, ERROR_INVALID_DECIMALS);

        let market = self.deploy_market(&asset, decimals, &reserve_fee, &model);

        self.markets(&asset).set(&market);
        self.market_assets(&market).set(&asset);
        self.trusted_markets().insert(market.clone());
        self.activated_assets().insert(asset.clone());

        let config = AssetConfig {
            collateral_factor: self.bps_zero(),
            borrow_factor: self.to_decimal(BigUint::from(DEFAULT_BORROW_FACTOR), BPS_PRECISION),
            borrow_isolated: true,
            twap_window: DEFAULT_TWAP_WINDOW,
            pricing: PricingConfig::Twap {
                pool_fee: DEFAULT_POOL_FEE,
            },
        };
        self.asset_config(&asset).set(&config);

        self.market_activated_event(&asset, &market, decimals);
        self.asset_config_event(&asset, &config);

        market
    }

    /// Upgrades the ledger of `asset` to the current market template.
    #[only_owner]
    #[endpoint(upgradeMarket)]
    fn upgrade_market(&self, asset: EgldOrEsdtTokenIdentifier) {
        let market = self.require_market_activated(&asset);

        self.market_upgraded_event(&asset, &market);
        self.upgrade_market_code(market);
    }
}
