use common_errors::ERROR_MARKET_NOT_ACTIVATED;
use common_structs::{AssetConfig, MarketState, PriceQuote, SubAccount};

multiversx_sc::imports!();

/// Memo of everything an endpoint reads more than once: configs, ledger
/// addresses, market states brought to the current block and prices.
///
/// Also carries the sub-accounts whose health check is postponed to the end
/// of the current batch.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage + common_rates::InterestRates,
{
    sc_ref: &'a C,

    pub prices: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, PriceQuote<C::Api>>,
    pub asset_configs:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, AssetConfig<C::Api>>,
    pub markets: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, ManagedAddress<C::Api>>,
    pub market_states:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, MarketState<C::Api>>,
    pub deferred: ManagedVec<C::Api, SubAccount<C::Api>>,
    pub reference_asset: EgldOrEsdtTokenIdentifier<C::Api>,
    pub timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_rates::InterestRates,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            sc_ref,
            prices: ManagedMapEncoded::new(),
            asset_configs: ManagedMapEncoded::new(),
            markets: ManagedMapEncoded::new(),
            market_states: ManagedMapEncoded::new(),
            deferred: ManagedVec::new(),
            reference_asset: sc_ref.reference_asset().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
        }
    }

    pub fn get_cached_asset_config(
        &mut self,
        asset: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> AssetConfig<C::Api> {
        if self.asset_configs.contains(asset) {
            return self.asset_configs.get(asset);
        }

        let config = self.sc_ref.asset_config(asset).get();
        self.asset_configs.put(asset, &config);

        config
    }

    /// Ledger of `asset`.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_ACTIVATED`: no ledger was deployed for `asset`.
    pub fn get_cached_market(
        &mut self,
        asset: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedAddress<C::Api> {
        if self.markets.contains(asset) {
            return self.markets.get(asset);
        }

        let mapper = self.sc_ref.markets(asset);
        if mapper.is_empty() {
            multiversx_sc::contract_base::ErrorHelper::<C::Api>::signal_error_with_message(
                ERROR_MARKET_NOT_ACTIVATED,
            );
        }
        let market = mapper.get();
        self.markets.put(asset, &market);

        market
    }

    /// Market totals of `asset` with interest simulated up to the current
    /// block. Nothing is written to the ledger.
    pub fn get_cached_market_state(
        &mut self,
        asset: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> MarketState<C::Api> {
        if self.market_states.contains(asset) {
            return self.market_states.get(asset);
        }

        self.refresh_market_state(asset)
    }

    /// Re-reads the ledger of `asset`, to be called after any call that
    /// changed it.
    pub fn refresh_market_state(
        &mut self,
        asset: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> MarketState<C::Api> {
        let market = self.get_cached_market(asset);
        let mut state = self.sc_ref.ledger_market_state(market).get();
        self.sc_ref.accrue_market_state(&mut state, self.timestamp);
        self.market_states.put(asset, &state);

        state
    }

    pub fn is_deferred(&self, account: &SubAccount<C::Api>) -> bool {
        self.deferred.contains(account)
    }
}
