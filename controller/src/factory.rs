use common_errors::ERROR_TEMPLATE_EMPTY;
use common_proxies::proxy_market;
use common_structs::InterestRateModel;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait FactoryModule: storage::Storage {
    /// Deploys a ledger for `asset` from the market template. The
    /// controller becomes the only sender the ledger trusts.
    fn deploy_market(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        decimals: usize,
        reserve_fee: &BigUint,
        model: &InterestRateModel<Self::Api>,
    ) -> ManagedAddress {
        let template = self.market_template();
        require!(!template.is_empty(), ERROR_TEMPLATE_EMPTY);

        self.tx()
            .typed(proxy_market::MarketLedgerProxy)
            .init(asset, decimals, reserve_fee, model)
            .from_source(template.get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call()
    }

    fn upgrade_market_code(&self, market: ManagedAddress) {
        let template = self.market_template();
        require!(!template.is_empty(), ERROR_TEMPLATE_EMPTY);

        self.tx()
            .to(market)
            .typed(proxy_market::MarketLedgerProxy)
            .upgrade()
            .from_source(template.get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .upgrade_async_call_and_exit();
    }
}
