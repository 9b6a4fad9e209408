multiversx_sc::imports!();

use common_constants::{MAX_HEALTH, WAD_PRECISION};
use common_errors::{ERROR_BORROW_ISOLATION_VIOLATION, ERROR_COLLATERAL_VIOLATION};
use common_structs::{AccountLiquidity, SubAccount};

use crate::{cache::Cache, oracle, storage, utils};

/// Pending change to one market of an account, see `simulate_liquidity`.
pub struct PositionDelta<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub balance_added: ManagedDecimal<M, NumDecimals>,
    pub balance_removed: ManagedDecimal<M, NumDecimals>,
    pub debt_added: ManagedDecimal<M, NumDecimals>,
    pub debt_removed: ManagedDecimal<M, NumDecimals>,
    pub exit: bool,
}

#[multiversx_sc::module]
pub trait RiskModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Risk adjusted value of every market `account` entered, priced at TWAP.
    ///
    /// **Formula**:
    /// - `collateral_value = Σ balance × price × CF`
    /// - `liability_value = Σ debt × price / BF`
    /// - `override_collateral_value`: the same collateral sum where each
    ///   collateral with an enabled override against one of the account
    ///   liabilities counts at the override factor instead, see
    ///   `override_collateral_value`.
    fn compute_liquidity(
        &self,
        account: &SubAccount<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> AccountLiquidity<Self::Api> {
        self.simulate_liquidity(account, None, cache)
    }

    /// `compute_liquidity` with `delta` applied to the stored positions of
    /// one market. A market gaining balance or debt counts as entered, an
    /// exited one is left out.
    fn simulate_liquidity(
        &self,
        account: &SubAccount<Self::Api>,
        delta: Option<&PositionDelta<Self::Api>>,
        cache: &mut Cache<Self>,
    ) -> AccountLiquidity<Self::Api> {
        let mut markets: ManagedVec<EgldOrEsdtTokenIdentifier> = ManagedVec::new();
        for asset in self.entered_markets(account).iter() {
            markets.push(asset);
        }
        if let Some(delta) = delta {
            let enters =
                delta.balance_added > self.wad_zero() || delta.debt_added > self.wad_zero();
            if enters && !delta.exit && !markets.contains(&delta.asset) {
                markets.push(delta.asset.clone());
            }
        }

        let mut collateral_value = self.wad_zero();
        let mut liability_value = self.wad_zero();
        let mut num_borrows = 0usize;
        let mut borrow_isolated = false;

        let mut collaterals: ManagedVec<EgldOrEsdtTokenIdentifier> = ManagedVec::new();
        let mut collateral_amounts: ManagedVec<BigUint> = ManagedVec::new();
        let mut collateral_adjusted: ManagedVec<BigUint> = ManagedVec::new();
        let mut liabilities: ManagedVec<EgldOrEsdtTokenIdentifier> = ManagedVec::new();
        let mut liability_adjusted: ManagedVec<BigUint> = ManagedVec::new();

        for asset in markets.iter() {
            let asset = (*asset).clone();
            let change = delta.filter(|delta| delta.asset == asset);
            if change.is_some_and(|delta| delta.exit) {
                continue;
            }

            let config = cache.get_cached_asset_config(&asset);
            let price = self.get_price(&asset, cache).twap;

            let mut balance = self.account_balance(&asset, account, cache);
            let mut debt = self.account_debt(&asset, account, cache);
            if let Some(delta) = change {
                balance = self.apply_change(balance, &delta.balance_added, &delta.balance_removed);
                debt = self.apply_change(debt, &delta.debt_added, &delta.debt_removed);
            }

            if balance > self.wad_zero() {
                let value = self.mul_down(&balance, &price, WAD_PRECISION);
                let adjusted = self.mul_down(&value, &config.collateral_factor, WAD_PRECISION);
                collateral_value += &adjusted;

                collaterals.push(asset.clone());
                collateral_amounts.push(value.into_raw_units().clone());
                collateral_adjusted.push(adjusted.into_raw_units().clone());
            }

            if debt > self.wad_zero() {
                let value = self.mul_up(&debt, &price, WAD_PRECISION);
                let adjusted = self.div_up(&value, &config.borrow_factor, WAD_PRECISION);
                liability_value += &adjusted;
                num_borrows += 1;
                borrow_isolated |= config.borrow_isolated;

                liabilities.push(asset);
                liability_adjusted.push(adjusted.into_raw_units().clone());
            }
        }

        let override_collateral_value = self.override_collateral_value(
            &collaterals,
            &collateral_amounts,
            &collateral_adjusted,
            &liabilities,
            &liability_adjusted,
        );

        AccountLiquidity {
            collateral_value,
            liability_value,
            override_collateral_value,
            num_borrows,
            borrow_isolated,
        }
    }

    /// Collateral valuation with the override matrix applied.
    ///
    /// Each collateral goes to the liability granting it the highest enabled
    /// override factor, the first one in iteration order on ties. Per
    /// liability the override sum is capped at that liability's risk
    /// adjusted value; the part of its collaterals above the cap counts at
    /// the regular factor. Collaterals without any override count at the
    /// regular factor.
    fn override_collateral_value(
        &self,
        collaterals: &ManagedVec<EgldOrEsdtTokenIdentifier>,
        collateral_amounts: &ManagedVec<BigUint>,
        collateral_adjusted: &ManagedVec<BigUint>,
        liabilities: &ManagedVec<EgldOrEsdtTokenIdentifier>,
        liability_adjusted: &ManagedVec<BigUint>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let unassigned = liabilities.len();
        let mut assignments: ManagedVec<usize> = ManagedVec::new();
        let mut override_amounts: ManagedVec<BigUint> = ManagedVec::new();

        for (collateral_index, collateral) in collaterals.iter().enumerate() {
            let mut best: Option<(usize, ManagedDecimal<Self::Api, NumDecimals>)> = None;
            for (liability_index, liability) in liabilities.iter().enumerate() {
                if !self.override_collaterals(&liability).contains(&collateral) {
                    continue;
                }
                let entry = self.override_config(&liability, &collateral).get();
                let better = match &best {
                    Some((_, factor)) => &entry.collateral_factor > factor,
                    None => true,
                };
                if better {
                    best = Some((liability_index, entry.collateral_factor));
                }
            }

            match best {
                Some((liability_index, factor)) => {
                    let value =
                        self.to_decimal_wad((*collateral_amounts.get(collateral_index)).clone());
                    let adjusted = self.mul_down(&value, &factor, WAD_PRECISION);
                    assignments.push(liability_index);
                    override_amounts.push(adjusted.into_raw_units().clone());
                },
                None => {
                    assignments.push(unassigned);
                    override_amounts.push(BigUint::zero());
                },
            }
        }

        let mut total = self.wad_zero();
        for (collateral_index, assigned) in assignments.iter().enumerate() {
            if assigned == unassigned {
                total += self.to_decimal_wad((*collateral_adjusted.get(collateral_index)).clone());
            }
        }

        for (liability_index, cap) in liability_adjusted.iter().enumerate() {
            let cap = self.to_decimal_wad((*cap).clone());
            let mut override_sum = self.wad_zero();
            let mut regular_sum = self.wad_zero();
            for (collateral_index, assigned) in assignments.iter().enumerate() {
                if assigned != liability_index {
                    continue;
                }
                override_sum +=
                    self.to_decimal_wad((*override_amounts.get(collateral_index)).clone());
                regular_sum +=
                    self.to_decimal_wad((*collateral_adjusted.get(collateral_index)).clone());
            }

            if override_sum <= cap {
                total += override_sum;
                continue;
            }

            let excess = override_sum.clone() - cap.clone();
            let remainder = self.div_down(
                &self.mul_down(&regular_sum, &excess, WAD_PRECISION),
                &override_sum,
                WAD_PRECISION,
            );
            total += cap + remainder;
        }

        total
    }

    fn position_delta(&self, asset: &EgldOrEsdtTokenIdentifier) -> PositionDelta<Self::Api> {
        PositionDelta {
            asset: asset.clone(),
            balance_added: self.wad_zero(),
            balance_removed: self.wad_zero(),
            debt_added: self.wad_zero(),
            debt_removed: self.wad_zero(),
            exit: false,
        }
    }

    /// `value + added - removed`, floored at zero.
    fn apply_change(
        &self,
        value: ManagedDecimal<Self::Api, NumDecimals>,
        added: &ManagedDecimal<Self::Api, NumDecimals>,
        removed: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let value = value + added.clone();
        if &value > removed {
            value - removed.clone()
        } else {
            self.wad_zero()
        }
    }

    /// Collateral the account may count against its liabilities, the better
    /// of the regular and the override valuation.
    fn effective_collateral(
        &self,
        liquidity: &AccountLiquidity<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_max(
            liquidity.collateral_value.clone(),
            liquidity.override_collateral_value.clone(),
        )
    }

    /// `collateral / liability`, WAD. `MAX_HEALTH` raw units without
    /// liabilities.
    fn health_factor(
        &self,
        liquidity: &AccountLiquidity<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if liquidity.liability_value == self.wad_zero() {
            return self.to_decimal_wad(BigUint::from(MAX_HEALTH));
        }

        self.div_down(
            &self.effective_collateral(liquidity),
            &liquidity.liability_value,
            WAD_PRECISION,
        )
    }

    /// Health check run after any operation that can lower the health of
    /// `account`, skipped while the account is deferred by a batch.
    fn check_liquidity(&self, account: &SubAccount<Self::Api>, cache: &mut Cache<Self>) {
        if cache.is_deferred(account) {
            return;
        }

        self.require_healthy(account, cache);
    }

    /// # Errors
    /// - `ERROR_BORROW_ISOLATION_VIOLATION`: an isolated borrow next to any other borrow.
    /// - `ERROR_COLLATERAL_VIOLATION`: liabilities above the collateral.
    fn require_healthy(&self, account: &SubAccount<Self::Api>, cache: &mut Cache<Self>) {
        let liquidity = self.compute_liquidity(account, cache);
        if let Err(error) = self.liquidity_violation(&liquidity) {
            sc_panic!(error);
        }
    }

    /// The error `require_healthy` raises for `liquidity`, if any.
    fn liquidity_violation(
        &self,
        liquidity: &AccountLiquidity<Self::Api>,
    ) -> Result<(), &'static [u8]> {
        if liquidity.borrow_isolated && liquidity.num_borrows > 1 {
            return Err(ERROR_BORROW_ISOLATION_VIOLATION);
        }
        if self.effective_collateral(liquidity) < liquidity.liability_value {
            return Err(ERROR_COLLATERAL_VIOLATION);
        }

        Ok(())
    }
}
