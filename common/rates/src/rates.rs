#![no_std]

use common_constants::{RAY_PRECISION, SECONDS_PER_YEAR, WAD_PRECISION};
use common_structs::{ClassIndexContext, InterestRateModel, MarketState, UserDebt};

multiversx_sc::imports!();

/// Interest math shared by the market ledgers and by the controller, which
/// replays the same accrual to value accounts against up to date state.
///
/// Conventions:
/// - rates are per second, RAY
/// - utilization and accumulators are RAY
/// - supply side amounts are internal (WAD), debt amounts RAY
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// `borrows / (pool_size + borrows)`, zero when the pool holds nothing.
    fn utilization(
        &self,
        pool_size: &ManagedDecimal<Self::Api, NumDecimals>,
        total_borrows: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let borrows = self.rescale_down(total_borrows, WAD_PRECISION);
        let total = pool_size.rescale(WAD_PRECISION) + borrows.clone();

        if total == self.wad_zero() {
            return self.ray_zero();
        }

        self.div_down(&borrows, &total, RAY_PRECISION)
    }

    /// Per-second rate of `model` at `utilization`.
    ///
    /// **Formula**:
    /// - `Zero`: `0`.
    /// - `Fixed`: `annual_rate / SECONDS_PER_YEAR`.
    /// - `LinearKinked`: below the kink `base + (kink_rate - base) * u / kink`,
    ///   above it `kink_rate + (max - kink_rate) * (u - kink) / (1 - kink)`,
    ///   clamped at `max_rate`.
    /// - `ClassIndex`: `ln(index / previous_index) / elapsed` plus the annual
    ///   `spread_rate * u`, clamped at `max_rate`. Needs `class_context`.
    ///
    /// Rates are converted per second after clamping.
    fn compute_interest_rate(
        &self,
        model: &InterestRateModel<Self::Api>,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        class_context: Option<&ClassIndexContext<Self::Api>>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        match model {
            InterestRateModel::Zero => self.ray_zero(),
            InterestRateModel::Fixed { annual_rate } => self.annual_to_per_second(annual_rate),
            InterestRateModel::LinearKinked {
                base_rate,
                kink_rate,
                max_rate,
                kink_utilization,
            } => {
                let annual = self.kinked_annual_rate(
                    utilization,
                    base_rate,
                    kink_rate,
                    max_rate,
                    kink_utilization,
                );
                self.annual_to_per_second(&annual)
            },
            InterestRateModel::ClassIndex {
                spread_rate,
                max_rate,
                ..
            } => match class_context {
                Some(context) => self.class_index_rate(context, utilization, spread_rate, max_rate),
                None => self.ray_zero(),
            },
        }
    }

    fn kinked_annual_rate(
        &self,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        base_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        kink_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        max_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        kink_utilization: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let u = utilization.rescale(RAY_PRECISION);
        let base = base_rate.rescale(RAY_PRECISION);
        let kink_rate = kink_rate.rescale(RAY_PRECISION);
        let max = max_rate.rescale(RAY_PRECISION);
        let kink = kink_utilization.rescale(RAY_PRECISION);

        let annual = if u <= kink {
            if kink == self.ray_zero() {
                kink_rate
            } else {
                let slope = kink_rate - base.clone();
                base + self.mul_half_up(&slope, &self.div_half_up(&u, &kink, RAY_PRECISION), RAY_PRECISION)
            }
        } else {
            let remaining = self.ray() - kink.clone();
            if remaining == self.ray_zero() {
                max.clone()
            } else {
                let slope = max.clone() - kink_rate.clone();
                let excess = u - kink;
                kink_rate
                    + self.mul_half_up(
                        &slope,
                        &self.div_half_up(&excess, &remaining, RAY_PRECISION),
                        RAY_PRECISION,
                    )
            }
        };

        self.get_min(annual, max)
    }

    /// Continuously compounded yield of the external index since the last
    /// snapshot, plus the utilization spread.
    fn class_index_rate(
        &self,
        context: &ClassIndexContext<Self::Api>,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        spread_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        max_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if context.now <= context.previous.timestamp {
            return context.cached_rate.rescale(RAY_PRECISION);
        }
        let elapsed = context.now - context.previous.timestamp;

        let previous = context.previous.index.rescale(RAY_PRECISION);
        let current = context.current_index.rescale(RAY_PRECISION);

        let yield_rate = if previous == self.ray_zero() || current <= previous {
            self.ray_zero()
        } else {
            let growth = self.div_down(&current, &previous, RAY_PRECISION);
            let continuous = self.ln_ray(&growth);
            self.div_down(
                &continuous,
                &self.to_decimal(BigUint::from(elapsed), 0),
                RAY_PRECISION,
            )
        };

        let spread = self.annual_to_per_second(&self.mul_half_up(
            spread_rate,
            utilization,
            RAY_PRECISION,
        ));
        let cap = self.annual_to_per_second(max_rate);

        self.get_min(yield_rate + spread, cap)
    }

    fn annual_to_per_second(
        &self,
        annual_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_half_up(
            annual_rate,
            &self.to_decimal(BigUint::from(SECONDS_PER_YEAR), 0),
            RAY_PRECISION,
        )
    }

    /// Brings `state` to `now`.
    ///
    /// **Formula**:
    /// - `accumulator *= (1 + rate) ^ elapsed`
    /// - `total_borrows *= new_accumulator / old_accumulator`, rounded up
    /// - reserve fee minted as supply:
    ///   `new_total_balances = pool_assets * total_balances / (pool_assets - new_interest * fee)`
    ///
    /// Returns the interest accrued in this step, in internal units. A zero
    /// elapsed time leaves the state untouched.
    fn accrue_market_state(
        &self,
        state: &mut MarketState<Self::Api>,
        now: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if now <= state.last_update {
            return self.wad_zero();
        }
        let elapsed = now - state.last_update;
        state.last_update = now;

        let growth_base = self.ray() + state.interest_rate.rescale(RAY_PRECISION);
        let factor = self.rpow(&growth_base, elapsed);

        let old_accumulator = state.interest_accumulator.rescale(RAY_PRECISION);
        let new_accumulator = self.mul_half_up(&old_accumulator, &factor, RAY_PRECISION);
        if new_accumulator <= old_accumulator {
            return self.wad_zero();
        }

        let old_borrows = state.total_borrows.rescale(RAY_PRECISION);
        let new_borrows = self.div_up(
            &self.mul_up(&old_borrows, &new_accumulator, RAY_PRECISION),
            &old_accumulator,
            RAY_PRECISION,
        );

        state.interest_accumulator = new_accumulator;
        state.total_borrows = new_borrows.clone();

        let new_interest = self.rescale_down(&(new_borrows - old_borrows), WAD_PRECISION);
        if new_interest == self.wad_zero() || state.reserve_fee == self.bps_zero() {
            return new_interest;
        }

        let pool_assets = self.pool_assets(state);
        let fee_assets = self.mul_down(&new_interest, &state.reserve_fee, WAD_PRECISION);
        if fee_assets >= pool_assets || state.total_balances == self.wad_zero() {
            return new_interest;
        }

        let old_balances = state.total_balances.rescale(WAD_PRECISION);
        let new_balances = self.div_down(
            &self.mul_down(&pool_assets, &old_balances, WAD_PRECISION),
            &(pool_assets - fee_assets),
            WAD_PRECISION,
        );

        if new_balances > old_balances {
            let minted = new_balances.clone() - old_balances;
            state.reserve_balance = state.reserve_balance.rescale(WAD_PRECISION) + minted;
            state.total_balances = new_balances;
        }

        new_interest
    }

    /// `pool_size + total_borrows`, the debt floored to internal units.
    fn pool_assets(&self, state: &MarketState<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        state.pool_size.rescale(WAD_PRECISION) + self.rescale_down(&state.total_borrows, WAD_PRECISION)
    }

    /// Underlying per scaled balance unit, WAD. One when the market is empty.
    fn exchange_rate(&self, state: &MarketState<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let pool_assets = self.pool_assets(state);
        if pool_assets == self.wad_zero() || state.total_balances == self.wad_zero() {
            return self.wad();
        }

        self.div_down(&pool_assets, &state.total_balances, WAD_PRECISION)
    }

    /// Underlying value of a scaled balance, rounded down.
    fn balance_to_underlying(
        &self,
        state: &MarketState<Self::Api>,
        scaled: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let pool_assets = self.pool_assets(state);
        if pool_assets == self.wad_zero() || state.total_balances == self.wad_zero() {
            return scaled.rescale(WAD_PRECISION);
        }

        self.to_decimal_wad(
            scaled.rescale(WAD_PRECISION).into_raw_units() * pool_assets.into_raw_units()
                / state.total_balances.rescale(WAD_PRECISION).into_raw_units(),
        )
    }

    /// Scaled balance minted for a deposit of `amount`, rounded down.
    fn underlying_to_balance_down(
        &self,
        state: &MarketState<Self::Api>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let pool_assets = self.pool_assets(state);
        if pool_assets == self.wad_zero() || state.total_balances == self.wad_zero() {
            return amount.rescale(WAD_PRECISION);
        }

        self.to_decimal_wad(
            amount.rescale(WAD_PRECISION).into_raw_units()
                * state.total_balances.rescale(WAD_PRECISION).into_raw_units()
                / pool_assets.into_raw_units(),
        )
    }

    /// Scaled balance burnt to release `amount`, rounded up.
    fn underlying_to_balance_up(
        &self,
        state: &MarketState<Self::Api>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let pool_assets = self.pool_assets(state);
        if pool_assets == self.wad_zero() || state.total_balances == self.wad_zero() {
            return amount.rescale(WAD_PRECISION);
        }

        let numerator = amount.rescale(WAD_PRECISION).into_raw_units()
            * state.total_balances.rescale(WAD_PRECISION).into_raw_units();
        let denominator = pool_assets.into_raw_units();
        let rounding = denominator - &BigUint::from(1u64);

        self.to_decimal_wad((numerator + rounding) / denominator)
    }

    /// Debt of `user` at `accumulator`, RAY, rounded up.
    fn current_debt(
        &self,
        user: &UserDebt<Self::Api>,
        accumulator: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if user.owed == self.ray_zero() || user.accumulator == self.ray_zero() {
            return self.ray_zero();
        }
        if &user.accumulator == accumulator {
            return user.owed.rescale(RAY_PRECISION);
        }

        self.div_up(
            &self.mul_up(&user.owed, accumulator, RAY_PRECISION),
            &user.accumulator,
            RAY_PRECISION,
        )
    }

    /// Debt converted to internal units, rounded up.
    fn debt_to_internal(
        &self,
        debt: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.rescale_up(debt, WAD_PRECISION)
    }
}
