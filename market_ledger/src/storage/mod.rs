multiversx_sc::imports!();

use common_structs::{IndexSnapshot, InterestRateModel, MarketState, SubAccount, UserDebt};

/// Persistent state of a market ledger.
///
/// The controller reads `market_state`, `balance` and `debt` directly
/// through `storage_mapper_from_address`, so the keys are part of the
/// interface between the two contracts.
#[multiversx_sc::module]
pub trait Storage {
    /// Address allowed to mutate this ledger, the deployer.
    #[view(getController)]
    #[storage_mapper("controller")]
    fn controller(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getAsset)]
    #[storage_mapper("asset")]
    fn asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Market totals as of the last accrual. Use `getMarketState` for the
    /// state brought to the current block.
    #[view(getStoredMarketState)]
    #[storage_mapper("market_state")]
    fn market_state(&self) -> SingleValueMapper<MarketState<Self::Api>>;

    #[view(getInterestRateModel)]
    #[storage_mapper("interest_rate_model")]
    fn interest_rate_model(&self) -> SingleValueMapper<InterestRateModel<Self::Api>>;

    /// Last external index read by a class model.
    #[view(getIndexSnapshot)]
    #[storage_mapper("index_snapshot")]
    fn index_snapshot(&self) -> SingleValueMapper<IndexSnapshot<Self::Api>>;

    /// Scaled balance of a sub-account, WAD.
    #[view(getScaledBalance)]
    #[storage_mapper("balance")]
    fn balance(
        &self,
        account: &SubAccount<Self::Api>,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getUserDebt)]
    #[storage_mapper("debt")]
    fn debt(&self, account: &SubAccount<Self::Api>) -> SingleValueMapper<UserDebt<Self::Api>>;

    /// Underlying the spender may move out of the owner's balance, internal units.
    #[view(getAllowance)]
    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &SubAccount<Self::Api>,
        spender: &SubAccount<Self::Api>,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Debt the spender may move onto the owner, internal units.
    #[view(getDebtAllowance)]
    #[storage_mapper("debt_allowance")]
    fn debt_allowance(
        &self,
        owner: &SubAccount<Self::Api>,
        spender: &SubAccount<Self::Api>,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;
}
