multiversx_sc::imports!();

use common_constants::RAY_PRECISION;
use common_errors::{
    ERROR_AMOUNT_ZERO, ERROR_INVALID_PAYMENT, ERROR_INVALID_RATE_MODEL, ERROR_SENDER_NOT_TRUSTED,
};
use common_proxies::proxy_index_source;
use common_structs::{ClassIndexContext, IndexSnapshot, InterestRateModel};

use crate::{cache::Cache, storage};

#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_math::codec::AmountCodecModule
    + common_rates::InterestRates
{
    /// Mutations are reserved to the controller that deployed this ledger.
    fn require_controller(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.controller().get(),
            ERROR_SENDER_NOT_TRUSTED
        );
    }

    /// Brings the cached state to the current block.
    fn accrue(&self, cache: &mut Cache<Self>) {
        let now = cache.timestamp;
        self.accrue_market_state(&mut cache.state, now);
    }

    /// Recomputes the stored rate from the post-operation utilization. The
    /// new rate applies from the next accrual on.
    fn update_interest_rate(&self, cache: &mut Cache<Self>) {
        let utilization = self.utilization(&cache.state.pool_size, &cache.state.total_borrows);

        let rate = match cache.model.index_source() {
            Some(source) => {
                let context = ClassIndexContext {
                    previous: self.index_snapshot().get(),
                    current_index: self.read_index(source),
                    now: cache.timestamp,
                    cached_rate: cache.state.interest_rate.clone(),
                };
                let rate = self.compute_interest_rate(&cache.model, &utilization, Some(&context));
                if context.now > context.previous.timestamp {
                    self.index_snapshot().set(IndexSnapshot {
                        index: context.current_index,
                        timestamp: context.now,
                    });
                }
                rate
            },
            None => self.compute_interest_rate(&cache.model, &utilization, None),
        };

        cache.state.interest_rate = rate;
    }

    fn read_index(&self, source: &ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let index = self
            .tx()
            .to(source)
            .typed(proxy_index_source::IndexSourceProxy)
            .get_exchange_rate()
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.to_decimal_ray(index)
    }

    fn reset_index_snapshot(&self, model: &InterestRateModel<Self::Api>, now: u64) {
        match model.index_source() {
            Some(source) => {
                let index = self.read_index(source);
                self.index_snapshot().set(IndexSnapshot {
                    index,
                    timestamp: now,
                });
            },
            None => self.index_snapshot().clear(),
        }
    }

    fn validate_interest_rate_model(&self, model: &InterestRateModel<Self::Api>) {
        let one = self.ray();
        match model {
            InterestRateModel::Zero | InterestRateModel::Fixed { .. } => {},
            InterestRateModel::LinearKinked {
                base_rate,
                kink_rate,
                max_rate,
                kink_utilization,
            } => {
                require!(
                    base_rate.rescale(RAY_PRECISION) <= kink_rate.rescale(RAY_PRECISION)
                        && kink_rate.rescale(RAY_PRECISION) <= max_rate.rescale(RAY_PRECISION),
                    ERROR_INVALID_RATE_MODEL
                );
                require!(
                    kink_utilization.rescale(RAY_PRECISION) <= one,
                    ERROR_INVALID_RATE_MODEL
                );
            },
            InterestRateModel::ClassIndex { source, .. } => {
                require!(!source.is_zero(), ERROR_INVALID_RATE_MODEL);
            },
        }
    }

    /// The single fungible payment of the call, checked against the market asset.
    fn get_payment_amount(&self, cache: &Cache<Self>) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_PAYMENT);
        require!(amount > 0, ERROR_AMOUNT_ZERO);

        amount
    }

    fn send_asset(&self, cache: &Cache<Self>, amount: &BigUint, to: &ManagedAddress) {
        let payment = EgldOrEsdtTokenPayment::new(cache.asset.clone(), 0, amount.clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();
    }

    /// `a - b`, floored at zero.
    fn saturating_sub(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scale = a.scale();
        let b = b.rescale(scale);
        if &b >= a {
            self.to_decimal(BigUint::zero(), scale)
        } else {
            a.clone() - b
        }
    }

    fn ray_from_internal(
        &self,
        internal: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        internal.rescale(RAY_PRECISION)
    }

    fn emit_market_state(&self, cache: &Cache<Self>) {
        self.market_state_event(&cache.asset, cache.timestamp, &cache.state);
    }
}
