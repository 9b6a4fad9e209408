use common_constants::{MAX_DISCOUNT, TARGET_HEALTH, WAD_PRECISION};
use common_errors::{
    ERROR_COLLATERAL_NOT_ENTERED, ERROR_EXCESSIVE_REPAY_AMOUNT, ERROR_MIN_YIELD,
    ERROR_NOT_IN_VIOLATION, ERROR_NO_LIABILITY, ERROR_SELF_LIQUIDATION, ERROR_UNABLE_TO_GET_PRICE,
};
use common_structs::{AmountSpec, LiquidationOpportunity, SubAccount};

use crate::{cache::Cache, oracle, risk, storage, utils, validation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + common_events::EventsModule
    + validation::ValidationModule
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + risk::RiskModule
    + account::PositionAccountModule
    + common_math::SharedMathModule
    + common_math::codec::AmountCodecModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Liquidates `violator`: the liquidator takes over up to the
    /// opportunity's repay of `underlying` debt and receives the matching
    /// discounted `collateral` balance. Both move as ledger positions, no
    /// tokens change hands.
    ///
    /// # Arguments
    /// - `repay`: `Max` takes the whole opportunity, `Exact` is a native amount of `underlying`.
    /// - `min_yield`: native amount of `collateral` the liquidator accepts at least.
    ///
    /// # Errors
    /// - `ERROR_EXCESSIVE_REPAY_AMOUNT`: `Exact` above the opportunity.
    /// - `ERROR_MIN_YIELD`: the yield is below `min_yield`.
    /// - Every error of `liquidation_opportunity`.
    fn process_liquidation(
        &self,
        liquidator: &SubAccount<Self::Api>,
        violator: &SubAccount<Self::Api>,
        underlying: &EgldOrEsdtTokenIdentifier,
        collateral: &EgldOrEsdtTokenIdentifier,
        repay: &AmountSpec<Self::Api>,
        min_yield: &BigUint,
        cache: &mut Cache<Self>,
    ) {
        self.ledger_touch(underlying, cache);
        if collateral != underlying {
            self.ledger_touch(collateral, cache);
        }

        let opportunity =
            self.liquidation_opportunity(violator, liquidator, underlying, collateral, cache);
        let (repay_amount, yield_amount) =
            self.requested_liquidation(&opportunity, underlying, repay, cache);

        let collateral_decimals = cache.get_cached_market_state(collateral).decimals;
        require!(
            self.encode_amount(min_yield, collateral_decimals) <= yield_amount,
            ERROR_MIN_YIELD
        );

        if repay_amount == self.wad_zero() {
            return;
        }

        self.seize_debt(violator, liquidator, underlying, &repay_amount, cache);
        self.seize_collateral(violator, liquidator, collateral, &yield_amount, cache);

        self.enter_market_internal(liquidator, underlying);
        self.enter_market_internal(liquidator, collateral);
        self.check_liquidity(liquidator, cache);

        self.liquidation_event(
            violator,
            liquidator,
            underlying,
            collateral,
            &repay_amount,
            &yield_amount,
        );
    }

    /// Repay and yield actually executed, internal units.
    fn requested_liquidation(
        &self,
        opportunity: &LiquidationOpportunity<Self::Api>,
        underlying: &EgldOrEsdtTokenIdentifier,
        repay: &AmountSpec<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let native = match repay {
            AmountSpec::Max => {
                return (
                    opportunity.repay.clone(),
                    opportunity.yield_amount.clone(),
                )
            },
            AmountSpec::Exact(native) => native,
        };

        let decimals = cache.get_cached_market_state(underlying).decimals;
        let requested = self.encode_amount(native, decimals);
        require!(
            requested <= opportunity.repay,
            ERROR_EXCESSIVE_REPAY_AMOUNT
        );

        if requested == opportunity.repay {
            return (requested, opportunity.yield_amount.clone());
        }

        let yield_amount = self.mul_down(&requested, &opportunity.conversion_rate, WAD_PRECISION);

        (requested, yield_amount)
    }

    fn seize_debt(
        &self,
        violator: &SubAccount<Self::Api>,
        liquidator: &SubAccount<Self::Api>,
        underlying: &EgldOrEsdtTokenIdentifier,
        repay: &ManagedDecimal<Self::Api, NumDecimals>,
        cache: &mut Cache<Self>,
    ) {
        let debt = self.account_debt(underlying, violator, cache);
        let amount = if repay >= &debt {
            AmountSpec::Max
        } else {
            let decimals = cache.get_cached_market_state(underlying).decimals;
            let native = self.decode_amount(repay, decimals);
            if native == BigUint::zero() {
                return;
            }
            AmountSpec::Exact(native)
        };

        self.ledger_transfer_debt(underlying, violator, liquidator, amount, liquidator, cache);
    }

    fn seize_collateral(
        &self,
        violator: &SubAccount<Self::Api>,
        liquidator: &SubAccount<Self::Api>,
        collateral: &EgldOrEsdtTokenIdentifier,
        yield_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        cache: &mut Cache<Self>,
    ) {
        let balance = self.account_balance(collateral, violator, cache);
        let amount = if yield_amount >= &balance {
            AmountSpec::Max
        } else {
            let decimals = cache.get_cached_market_state(collateral).decimals;
            let native = self.decode_amount(yield_amount, decimals);
            if native == BigUint::zero() {
                return;
            }
            AmountSpec::Exact(native)
        };

        self.ledger_transfer_balance(collateral, violator, liquidator, amount, violator, cache);
    }

    /// Largest liquidation of `violator` through the `(underlying,
    /// collateral)` pair, sized to bring its health back to `TARGET_HEALTH`.
    ///
    /// **Formula**:
    /// - `discount = min(1 - health, MAX_DISCOUNT)`
    /// - `conversion = pU / pC / (1 - discount)`, collateral units per unit repaid
    /// - `repay = (T * L - C) / (pU * (T / BF - CF / (1 - discount)))`
    ///
    /// The pair uses its override factor when one is enabled and the
    /// override valuation is the one counted. The liability keeps the
    /// underlying borrow factor either way, as in `compute_liquidity`.
    /// When the closed form has no positive solution, or an override pair
    /// cannot yield it, the repay falls back to the smaller of the seizure
    /// capacity and the solution under the regular factors. The result is
    /// clamped to the debt and the collateral balance.
    ///
    /// # Errors
    /// - `ERROR_SELF_LIQUIDATION`: both sub-accounts belong to the same wallet.
    /// - `ERROR_NO_LIABILITY`: the violator does not owe `underlying`.
    /// - `ERROR_COLLATERAL_NOT_ENTERED`: `collateral` does not back the violator.
    /// - `ERROR_NOT_IN_VIOLATION`: health at or above one.
    fn liquidation_opportunity(
        &self,
        violator: &SubAccount<Self::Api>,
        liquidator: &SubAccount<Self::Api>,
        underlying: &EgldOrEsdtTokenIdentifier,
        collateral: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> LiquidationOpportunity<Self::Api> {
        require!(violator.owner != liquidator.owner, ERROR_SELF_LIQUIDATION);

        let debt = self.account_debt(underlying, violator, cache);
        require!(debt > self.wad_zero(), ERROR_NO_LIABILITY);
        require!(
            self.entered_markets(violator).contains(collateral),
            ERROR_COLLATERAL_NOT_ENTERED
        );

        let liquidity = self.compute_liquidity(violator, cache);
        let health = self.health_factor(&liquidity);
        require!(health < self.wad(), ERROR_NOT_IN_VIOLATION);

        let discount = self.get_min(
            self.wad() - health.clone(),
            self.to_decimal_wad(BigUint::from(MAX_DISCOUNT)),
        );
        let one_minus_discount = self.wad() - discount.clone();

        let underlying_price = self.get_price(underlying, cache).twap;
        let collateral_price = self.get_price(collateral, cache).twap;
        require!(
            underlying_price > self.wad_zero() && collateral_price > self.wad_zero(),
            ERROR_UNABLE_TO_GET_PRICE
        );
        let conversion_rate = self.div_down(
            &self.div_down(&underlying_price, &collateral_price, WAD_PRECISION),
            &one_minus_discount,
            WAD_PRECISION,
        );

        let collateral_balance = self.account_balance(collateral, violator, cache);
        let capacity = if conversion_rate == self.wad_zero() {
            collateral_balance.clone()
        } else {
            self.div_down(&collateral_balance, &conversion_rate, WAD_PRECISION)
        };

        let collateral_config = cache.get_cached_asset_config(collateral);
        let underlying_config = cache.get_cached_asset_config(underlying);
        let override_factor = if liquidity.override_collateral_value > liquidity.collateral_value {
            self.enabled_override(underlying, collateral)
        } else {
            None
        };

        let factor = match &override_factor {
            Some(factor) => factor.clone(),
            None => collateral_config.collateral_factor.clone(),
        };

        let primary = self
            .target_health_repay(
                &liquidity.liability_value,
                &self.effective_collateral(&liquidity),
                &underlying_price,
                &factor,
                &underlying_config.borrow_factor,
                &one_minus_discount,
            )
            .filter(|repay| repay > &self.wad_zero())
            .filter(|repay| {
                override_factor.is_none()
                    || self.mul_down(repay, &conversion_rate, WAD_PRECISION) <= collateral_balance
            });

        let mut repay = match primary {
            Some(repay) => repay,
            None => {
                let regular = self
                    .target_health_repay(
                        &liquidity.liability_value,
                        &liquidity.collateral_value,
                        &underlying_price,
                        &collateral_config.collateral_factor,
                        &underlying_config.borrow_factor,
                        &one_minus_discount,
                    )
                    .unwrap_or_else(|| capacity.clone());
                self.get_min(capacity, regular)
            },
        };

        repay = self.get_min(repay, debt);
        let mut yield_amount = self.mul_down(&repay, &conversion_rate, WAD_PRECISION);
        if yield_amount > collateral_balance {
            yield_amount = collateral_balance.clone();
            repay = self.div_down(&collateral_balance, &conversion_rate, WAD_PRECISION);
        }

        LiquidationOpportunity {
            repay,
            yield_amount,
            health_score: health,
            discount,
            conversion_rate,
        }
    }

    /// Repay bringing `collateral / liability` to `TARGET_HEALTH`.
    ///
    /// Zero when the account is already at the target, `None` when no
    /// repay reaches it because every unit repaid removes more collateral
    /// value than the target allows.
    fn target_health_repay(
        &self,
        liability: &ManagedDecimal<Self::Api, NumDecimals>,
        collateral: &ManagedDecimal<Self::Api, NumDecimals>,
        underlying_price: &ManagedDecimal<Self::Api, NumDecimals>,
        collateral_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        one_minus_discount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> Option<ManagedDecimal<Self::Api, NumDecimals>> {
        let target = self.to_decimal_wad(BigUint::from(TARGET_HEALTH));

        let target_liability = self.mul_up(&target, liability, WAD_PRECISION);
        let collateral = collateral.rescale(WAD_PRECISION);
        if target_liability <= collateral {
            return Some(self.wad_zero());
        }
        let numerator = target_liability - collateral;

        let released = self.div_down(&target, borrow_factor, WAD_PRECISION);
        let seized = self.div_up(collateral_factor, one_minus_discount, WAD_PRECISION);
        if released <= seized {
            return None;
        }

        let denominator = self.mul_up(underlying_price, &(released - seized), WAD_PRECISION);
        if denominator == self.wad_zero() {
            return None;
        }

        Some(self.div_down(&numerator, &denominator, WAD_PRECISION))
    }

    /// Override factor of the pair, `None` when absent or disabled.
    fn enabled_override(
        &self,
        liability: &EgldOrEsdtTokenIdentifier,
        collateral: &EgldOrEsdtTokenIdentifier,
    ) -> Option<ManagedDecimal<Self::Api, NumDecimals>> {
        if !self.override_collaterals(liability).contains(collateral) {
            return None;
        }

        Some(self.override_config(liability, collateral).get().collateral_factor)
    }
}
