multiversx_sc::imports!();
use common_constants::{
    DEFAULT_TWAP_WINDOW, FEED_DECIMALS_SHIFT, MAX_TICK, PRICING_TYPE_CUSTOM, QUOTE_TYPE_REFERENCE,
    RAY_PRECISION, TICK_BASE, WAD_PRECISION,
};
use common_errors::{
    ERROR_NESTED_PRICE_FORWARDING, ERROR_POOL_NOT_FOUND, ERROR_PRICE_FEED_NOT_INITIALIZED,
    ERROR_TWAP_FACTORY_NOT_SET, ERROR_UNABLE_TO_GET_PRICE,
};
use common_proxies::{proxy_price_adapter, proxy_price_feed, proxy_twap_factory, proxy_twap_pool};
use common_structs::{PriceFeedConfig, PriceQuote, PricingConfig};

use crate::{cache::Cache, storage};

#[multiversx_sc::module]
pub trait OracleModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    /// Price of one internal unit of `asset` in internal units of the
    /// reference asset, WAD. Cached for the rest of the call.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_ACTIVATED`: `asset` is not the reference asset and has no market.
    /// - `ERROR_NESTED_PRICE_FORWARDING`: `asset` forwards to an asset that forwards again.
    /// - `ERROR_UNABLE_TO_GET_PRICE`: the feed failed and no fallback pool is configured.
    ///
    /// A feed or adapter that reverts is not a failed feed: a synchronous
    /// call cannot catch the revert, so the whole transaction aborts and the
    /// fallback pool is never consulted.
    fn get_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> PriceQuote<Self::Api> {
        if asset == &cache.reference_asset {
            return self.unit_quote();
        }
        if cache.prices.contains(asset) {
            return cache.prices.get(asset);
        }

        cache.get_cached_market(asset);
        let config = cache.get_cached_asset_config(asset);
        let quote = match &config.pricing {
            PricingConfig::Forwarded { target } => self.forwarded_price(target, cache),
            pricing => self.resolve_price(asset, pricing, config.twap_window, cache),
        };

        cache.prices.put(asset, &quote);

        quote
    }

    /// Price of an asset wrapping the balance of another market: the target
    /// price times the exchange rate of the target ledger.
    fn forwarded_price(
        &self,
        target: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> PriceQuote<Self::Api> {
        if target != &cache.reference_asset {
            cache.get_cached_market(target);
            let target_config = cache.get_cached_asset_config(target);
            require!(
                !target_config.pricing.is_forwarded(),
                ERROR_NESTED_PRICE_FORWARDING
            );
        }

        let base = self.get_price(target, cache);
        let state = cache.get_cached_market_state(target);
        let rate = self.exchange_rate(&state);

        PriceQuote {
            current: self.mul_half_up(&base.current, &rate, WAD_PRECISION),
            twap: self.mul_half_up(&base.twap, &rate, WAD_PRECISION),
            twap_period: base.twap_period,
        }
    }

    fn resolve_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        pricing: &PricingConfig<Self::Api>,
        twap_window: u64,
        cache: &mut Cache<Self>,
    ) -> PriceQuote<Self::Api> {
        match pricing {
            PricingConfig::Pegged => self.unit_quote(),
            PricingConfig::Twap { pool_fee } => {
                self.twap_price(asset, *pool_fee, twap_window, cache)
            },
            PricingConfig::Feed { fallback_pool_fee } => match self.feed_price(asset, cache) {
                Some(quote) => quote,
                None => self.fallback_price(asset, *fallback_pool_fee, cache),
            },
            PricingConfig::Custom { fallback_pool_fee } => match self.custom_price(asset, cache) {
                Some(quote) => quote,
                None => self.fallback_price(asset, *fallback_pool_fee, cache),
            },
            PricingConfig::Forwarded { .. } => sc_panic!(ERROR_NESTED_PRICE_FORWARDING),
        }
    }

    fn fallback_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        pool_fee: u32,
        cache: &mut Cache<Self>,
    ) -> PriceQuote<Self::Api> {
        require!(pool_fee > 0, ERROR_UNABLE_TO_GET_PRICE);

        self.twap_price(asset, pool_fee, DEFAULT_TWAP_WINDOW, cache)
    }

    /// Time weighted price from the `(asset, reference, pool_fee)` pool.
    ///
    /// The averaging period is `twap_window` capped by the age of the oldest
    /// observation the pool still holds. Without any history the current
    /// tick is used and the reported period is zero.
    fn twap_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        pool_fee: u32,
        twap_window: u64,
        cache: &mut Cache<Self>,
    ) -> PriceQuote<Self::Api> {
        let factory = self.twap_factory();
        require!(!factory.is_empty(), ERROR_TWAP_FACTORY_NOT_SET);

        let pool = self
            .tx()
            .to(factory.get())
            .typed(proxy_twap_factory::TwapFactoryProxy)
            .get_pool(asset, &cache.reference_asset, pool_fee)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(!pool.is_zero(), ERROR_POOL_NOT_FOUND);

        let oldest = self
            .tx()
            .to(&pool)
            .typed(proxy_twap_pool::TwapPoolProxy)
            .oldest_observation_timestamp()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let history = if oldest == 0 || oldest >= cache.timestamp {
            0
        } else {
            cache.timestamp - oldest
        };
        let period = core::cmp::min(twap_window, history);

        let current_tick = self
            .tx()
            .to(&pool)
            .typed(proxy_twap_pool::TwapPoolProxy)
            .current_tick()
            .returns(ReturnsResult)
            .sync_call_readonly();

        let average_tick = if period == 0 {
            current_tick
        } else {
            let latest = self.tick_cumulative(&pool, 0);
            let earliest = self.tick_cumulative(&pool, period);
            self.average_tick(latest - earliest, period)
        };

        let token0 = self
            .tx()
            .to(&pool)
            .typed(proxy_twap_pool::TwapPoolProxy)
            .token0()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let asset_is_token0 = &token0 == asset;

        let asset_decimals = cache.get_cached_market_state(asset).decimals;
        let reference_decimals = self.reference_decimals().get();

        PriceQuote {
            current: self.tick_to_price(
                current_tick,
                asset_is_token0,
                asset_decimals,
                reference_decimals,
            ),
            twap: self.tick_to_price(
                average_tick,
                asset_is_token0,
                asset_decimals,
                reference_decimals,
            ),
            twap_period: period,
        }
    }

    fn tick_cumulative(&self, pool: &ManagedAddress, seconds_ago: u64) -> i64 {
        self.tx()
            .to(pool)
            .typed(proxy_twap_pool::TwapPoolProxy)
            .tick_cumulative(seconds_ago)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Mean tick over `period`, rounded toward negative infinity.
    fn average_tick(&self, cumulative_delta: i64, period: u64) -> i64 {
        let period = period as i64;
        let mut tick = cumulative_delta / period;
        if cumulative_delta < 0 && cumulative_delta % period != 0 {
            tick -= 1;
        }

        tick
    }

    /// Converts a pool tick into the WAD price of the asset in the
    /// reference asset.
    ///
    /// **Formula**:
    /// - `ratio = 1.0001 ^ |tick|` in RAY, inverted when the tick is negative
    /// - inverted again when the asset is token1, the pool quoting token1 per token0
    /// - scaled by `10 ^ (asset_decimals - reference_decimals)`
    fn tick_to_price(
        &self,
        tick: i64,
        asset_is_token0: bool,
        asset_decimals: usize,
        reference_decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let tick = tick.clamp(-MAX_TICK, MAX_TICK);
        let ratio = self.rpow(&self.to_decimal_ray(BigUint::from(TICK_BASE)), tick.unsigned_abs());

        let raw_price = if (tick >= 0) == asset_is_token0 {
            ratio
        } else {
            self.div_half_up(&self.ray(), &ratio, RAY_PRECISION)
        };

        let normalized = if asset_decimals >= reference_decimals {
            let factor = BigUint::from(10u64).pow((asset_decimals - reference_decimals) as u32);
            self.to_decimal_ray(raw_price.into_raw_units() * &factor)
        } else {
            let factor = BigUint::from(10u64).pow((reference_decimals - asset_decimals) as u32);
            self.to_decimal_ray(raw_price.into_raw_units() / &factor)
        };

        self.rescale_half_up(&normalized, WAD_PRECISION)
    }

    /// Push feed answer, `None` when missing, non-positive or stale. A
    /// reverting feed aborts the caller.
    fn feed_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        cache: &Cache<Self>,
    ) -> Option<PriceQuote<Self::Api>> {
        let feed = self.get_price_feed_config(asset);

        let answer = self
            .tx()
            .to(&feed.address)
            .typed(proxy_price_feed::PriceFeedProxy)
            .latest_answer()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let updated_at = self
            .tx()
            .to(&feed.address)
            .typed(proxy_price_feed::PriceFeedProxy)
            .latest_timestamp()
            .returns(ReturnsResult)
            .sync_call_readonly();

        if answer <= BigInt::zero() {
            return None;
        }

        self.validated_quote(&feed, answer.magnitude(), updated_at, cache.timestamp)
    }

    /// Custom adapter answer for the reference quote, `None` when missing,
    /// zero or stale.
    fn custom_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        cache: &Cache<Self>,
    ) -> Option<PriceQuote<Self::Api>> {
        let feed = self.get_price_feed_config(asset);
        let lookup_param = (QUOTE_TYPE_REFERENCE << FEED_DECIMALS_SHIFT) | PRICING_TYPE_CUSTOM as u32;

        let (price, updated_at) = self
            .tx()
            .to(&feed.address)
            .typed(proxy_price_adapter::PriceAdapterProxy)
            .get_price(asset, lookup_param)
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple();

        self.validated_quote(&feed, price, updated_at, cache.timestamp)
    }

    /// Scales a feed answer to WAD if it is positive and not older than the
    /// feed timeout. The answer age is reported as the period.
    fn validated_quote(
        &self,
        feed: &PriceFeedConfig<Self::Api>,
        answer: BigUint,
        updated_at: u64,
        now: u64,
    ) -> Option<PriceQuote<Self::Api>> {
        let age = now.saturating_sub(updated_at);
        if answer == BigUint::zero() || age > feed.timeout as u64 {
            return None;
        }

        let price = self
            .to_decimal(answer, feed.decimals as usize)
            .rescale(WAD_PRECISION);
        if price == self.wad_zero() {
            return None;
        }

        Some(PriceQuote {
            current: price.clone(),
            twap: price,
            twap_period: age,
        })
    }

    fn get_price_feed_config(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> PriceFeedConfig<Self::Api> {
        let mapper = self.price_feed(asset);
        require!(!mapper.is_empty(), ERROR_PRICE_FEED_NOT_INITIALIZED);

        let feed = mapper.get();
        require!(feed.is_initialized(), ERROR_PRICE_FEED_NOT_INITIALIZED);

        feed
    }

    fn unit_quote(&self) -> PriceQuote<Self::Api> {
        PriceQuote {
            current: self.wad(),
            twap: self.wad(),
            twap_period: 0,
        }
    }
}
