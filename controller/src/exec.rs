multiversx_sc::imports!();

use common_constants::{INTERNAL_DECIMALS, MAX_ENTERED_MARKETS, MAX_SANE_AMOUNT};
use common_errors::{
    ERROR_AMOUNT_TOO_LARGE_TO_ENCODE, ERROR_AMOUNT_ZERO, ERROR_BATCH_EMPTY,
    ERROR_COLLATERAL_NOT_ENTERED, ERROR_EXCESSIVE_REPAY_AMOUNT, ERROR_INSUFFICIENT_ALLOWANCE,
    ERROR_INSUFFICIENT_BALANCE, ERROR_INSUFFICIENT_POOL_SIZE, ERROR_MARKET_NOT_ACTIVATED,
    ERROR_MIN_YIELD, ERROR_NOT_IN_VIOLATION, ERROR_NO_LIABILITY, ERROR_OUTSTANDING_BORROW,
    ERROR_REPAY_TOO_MUCH, ERROR_SELF_LIQUIDATION, ERROR_SELF_TRANSFER,
    ERROR_TOO_MANY_ENTERED_MARKETS,
};
use common_structs::{AmountSpec, BatchItem, BatchOperation, SubAccount};

use crate::{
    cache::Cache,
    oracle,
    positions::{account, borrow, leverage, liquidation, transfer, withdraw},
    risk, storage, utils, validation,
};

type CheckResult = Result<(), &'static [u8]>;

fn check(condition: bool, error: &'static [u8]) -> CheckResult {
    if condition {
        Ok(())
    } else {
        Err(error)
    }
}

/// Ordered execution of several operations in one transaction.
///
/// Health checks of the listed sub-accounts are postponed until every item
/// ran, so intermediate states may be unhealthy. Items flagged with
/// `allow_error` are checked against the current state first, health of
/// accounts that are not deferred included, and skipped with a
/// `batch_item_failed` event when they would fail.
#[multiversx_sc::module]
pub trait ExecModule:
    storage::Storage
    + common_events::EventsModule
    + validation::ValidationModule
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + risk::RiskModule
    + account::PositionAccountModule
    + withdraw::PositionWithdrawModule
    + borrow::PositionBorrowModule
    + leverage::PositionLeverageModule
    + transfer::PositionTransferModule
    + liquidation::PositionLiquidationModule
    + common_math::SharedMathModule
    + common_math::codec::AmountCodecModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// # Arguments
    /// - `deferred`: caller sub-accounts checked once, after the last item.
    /// - `items`: operations in execution order.
    ///
    /// # Errors
    /// - `ERROR_BATCH_EMPTY`
    /// - `ERROR_INVALID_SUB_ACCOUNT_OWNER`: a deferred sub-account belongs to another wallet.
    /// - Any error of an item without `allow_error`, and the final health checks.
    #[endpoint(batch)]
    fn batch(
        &self,
        deferred: ManagedVec<SubAccount<Self::Api>>,
        items: MultiValueEncoded<BatchItem<Self::Api>>,
    ) {
        self.require_active();
        require!(!items.is_empty(), ERROR_BATCH_EMPTY);

        let caller = self.blockchain().get_caller();
        let mut cache = Cache::new(self);
        for account in deferred.iter() {
            self.require_sub_account_owner(&caller, &account);
            if !cache.deferred.contains(&account) {
                cache.deferred.push((*account).clone());
            }
        }

        for (index, item) in items.into_iter().enumerate() {
            if item.allow_error {
                if let Err(error) = self.validate_operation(&caller, &item.operation, &mut cache) {
                    self.batch_item_failed_event(&caller, index, &ManagedBuffer::from(error));
                    continue;
                }
            }

            self.execute_operation(&caller, item.operation, &mut cache);
        }

        let accounts = core::mem::replace(&mut cache.deferred, ManagedVec::new());
        for account in accounts.iter() {
            self.require_healthy(&account, &mut cache);
        }
    }

    fn execute_operation(
        &self,
        caller: &ManagedAddress,
        operation: BatchOperation<Self::Api>,
        cache: &mut Cache<Self>,
    ) {
        match operation {
            BatchOperation::EnterMarket { sub_account, asset } => {
                let account = SubAccount::new(caller.clone(), sub_account);
                self.process_enter_market(&account, &asset, cache);
            },
            BatchOperation::ExitMarket { sub_account, asset } => {
                let account = SubAccount::new(caller.clone(), sub_account);
                self.process_exit_market(&account, &asset, cache);
            },
            BatchOperation::Withdraw {
                sub_account,
                asset,
                amount,
            } => {
                let account = SubAccount::new(caller.clone(), sub_account);
                self.process_withdraw(&account, &asset, amount, caller, cache);
            },
            BatchOperation::Borrow {
                sub_account,
                asset,
                amount,
            } => {
                let account = SubAccount::new(caller.clone(), sub_account);
                self.process_borrow(&account, &asset, &amount, caller, cache);
            },
            BatchOperation::Mint {
                sub_account,
                asset,
                amount,
            } => {
                let account = SubAccount::new(caller.clone(), sub_account);
                self.process_mint(&account, &asset, &amount, cache);
            },
            BatchOperation::Burn {
                sub_account,
                asset,
                amount,
            } => {
                let account = SubAccount::new(caller.clone(), sub_account);
                self.process_burn(&account, &asset, amount, cache);
            },
            BatchOperation::TransferBalance {
                asset,
                from,
                to,
                amount,
            } => {
                self.process_transfer_balance(caller, &asset, &from, &to, amount, cache);
            },
            BatchOperation::TransferDebt {
                asset,
                from,
                to,
                amount,
            } => {
                self.process_transfer_debt(caller, &asset, &from, &to, amount, cache);
            },
            BatchOperation::Liquidate {
                violator,
                sub_account,
                underlying,
                collateral,
                repay,
                min_yield,
            } => {
                let liquidator = SubAccount::new(caller.clone(), sub_account);
                self.process_liquidation(
                    &liquidator,
                    &violator,
                    &underlying,
                    &collateral,
                    &repay,
                    &min_yield,
                    cache,
                );
            },
            BatchOperation::Touch { asset } => {
                self.ledger_touch(&asset, cache);
            },
        }
    }

    /// Dry run of `operation` against the current state. Returns the error
    /// the operation would raise, as far as it can be told without executing.
    fn validate_operation(
        &self,
        caller: &ManagedAddress,
        operation: &BatchOperation<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> CheckResult {
        match operation {
            BatchOperation::EnterMarket { sub_account, asset } => {
                check(self.is_activated(asset), ERROR_MARKET_NOT_ACTIVATED)?;
                let account = SubAccount::new(caller.clone(), *sub_account);
                self.check_can_enter(&account, asset)
            },
            BatchOperation::ExitMarket { sub_account, asset } => {
                let account = SubAccount::new(caller.clone(), *sub_account);
                if !self.entered_markets(&account).contains(asset) {
                    return Ok(());
                }
                check(
                    !self.has_debt(asset, &account, cache),
                    ERROR_OUTSTANDING_BORROW,
                )?;

                let mut delta = self.position_delta(asset);
                delta.exit = true;
                self.check_health_after(&account, delta, cache)
            },
            BatchOperation::Withdraw {
                sub_account,
                asset,
                amount,
            } => {
                check(self.is_activated(asset), ERROR_MARKET_NOT_ACTIVATED)?;
                let account = SubAccount::new(caller.clone(), *sub_account);
                let requested = match amount {
                    AmountSpec::Exact(native) => self.checked_encode(native, asset, cache)?,
                    AmountSpec::Max => self.account_balance(asset, &account, cache),
                };
                check(
                    requested <= self.account_balance(asset, &account, cache),
                    ERROR_INSUFFICIENT_BALANCE,
                )?;
                check(
                    requested <= cache.get_cached_market_state(asset).pool_size,
                    ERROR_INSUFFICIENT_POOL_SIZE,
                )?;

                let mut delta = self.position_delta(asset);
                delta.balance_removed = requested;
                self.check_health_after(&account, delta, cache)
            },
            BatchOperation::Borrow {
                sub_account,
                asset,
                amount,
            } => {
                check(self.is_activated(asset), ERROR_MARKET_NOT_ACTIVATED)?;
                let account = SubAccount::new(caller.clone(), *sub_account);
                let requested = self.checked_encode(amount, asset, cache)?;
                check(
                    requested <= cache.get_cached_market_state(asset).pool_size,
                    ERROR_INSUFFICIENT_POOL_SIZE,
                )?;
                self.check_can_enter(&account, asset)?;

                let mut delta = self.position_delta(asset);
                delta.debt_added = requested;
                self.check_health_after(&account, delta, cache)
            },
            BatchOperation::Mint {
                sub_account,
                asset,
                amount,
            } => {
                check(self.is_activated(asset), ERROR_MARKET_NOT_ACTIVATED)?;
                let account = SubAccount::new(caller.clone(), *sub_account);
                let requested = self.checked_encode(amount, asset, cache)?;
                self.check_can_enter(&account, asset)?;

                let mut delta = self.position_delta(asset);
                delta.balance_added = requested.clone();
                delta.debt_added = requested;
                self.check_health_after(&account, delta, cache)
            },
            BatchOperation::Burn {
                sub_account,
                asset,
                amount,
            } => {
                check(self.is_activated(asset), ERROR_MARKET_NOT_ACTIVATED)?;
                let account = SubAccount::new(caller.clone(), *sub_account);
                let debt = self.account_debt(asset, &account, cache);
                let balance = self.account_balance(asset, &account, cache);
                let burnt = match amount {
                    AmountSpec::Exact(native) => {
                        let requested = self.checked_encode(native, asset, cache)?;
                        check(requested <= debt, ERROR_REPAY_TOO_MUCH)?;
                        check(requested <= balance, ERROR_INSUFFICIENT_BALANCE)?;
                        requested
                    },
                    AmountSpec::Max => self.get_min(debt, balance),
                };

                let mut delta = self.position_delta(asset);
                delta.balance_removed = burnt.clone();
                delta.debt_removed = burnt;
                self.check_health_after(&account, delta, cache)
            },
            BatchOperation::TransferBalance {
                asset,
                from,
                to,
                amount,
            } => {
                check(self.is_activated(asset), ERROR_MARKET_NOT_ACTIVATED)?;
                check(from != to, ERROR_SELF_TRANSFER)?;
                let balance = self.account_balance(asset, from, cache);
                let requested = match amount {
                    AmountSpec::Exact(native) => self.checked_encode(native, asset, cache)?,
                    AmountSpec::Max => balance.clone(),
                };
                check(requested <= balance, ERROR_INSUFFICIENT_BALANCE)?;

                let spender = self.spender_for(caller, from);
                if &spender != from {
                    let market = cache.get_cached_market(asset);
                    let allowance = self.ledger_allowance(market, from.clone(), spender);
                    check(
                        !allowance.is_empty() && requested <= allowance.get(),
                        ERROR_INSUFFICIENT_ALLOWANCE,
                    )?;
                }

                let mut delta = self.position_delta(asset);
                delta.balance_removed = requested;
                self.check_health_after(from, delta, cache)
            },
            BatchOperation::TransferDebt {
                asset,
                from,
                to,
                amount,
            } => {
                check(self.is_activated(asset), ERROR_MARKET_NOT_ACTIVATED)?;
                check(from != to, ERROR_SELF_TRANSFER)?;
                let debt = self.account_debt(asset, from, cache);
                let requested = match amount {
                    AmountSpec::Exact(native) => self.checked_encode(native, asset, cache)?,
                    AmountSpec::Max => debt.clone(),
                };
                check(requested <= debt, ERROR_REPAY_TOO_MUCH)?;
                self.check_can_enter(to, asset)?;

                let spender = self.spender_for(caller, to);
                if &spender != to {
                    let market = cache.get_cached_market(asset);
                    let allowance = self.ledger_debt_allowance(market, to.clone(), spender);
                    check(
                        !allowance.is_empty() && requested <= allowance.get(),
                        ERROR_INSUFFICIENT_ALLOWANCE,
                    )?;
                }

                let mut delta = self.position_delta(asset);
                delta.debt_added = requested;
                self.check_health_after(to, delta, cache)
            },
            BatchOperation::Liquidate {
                violator,
                sub_account,
                underlying,
                collateral,
                repay,
                min_yield,
            } => {
                check(self.is_activated(underlying), ERROR_MARKET_NOT_ACTIVATED)?;
                check(self.is_activated(collateral), ERROR_MARKET_NOT_ACTIVATED)?;
                check(&violator.owner != caller, ERROR_SELF_LIQUIDATION)?;
                check(
                    self.has_debt(underlying, violator, cache),
                    ERROR_NO_LIABILITY,
                )?;
                check(
                    self.entered_markets(violator).contains(collateral),
                    ERROR_COLLATERAL_NOT_ENTERED,
                )?;
                let liquidity = self.compute_liquidity(violator, cache);
                check(
                    self.health_factor(&liquidity) < self.wad(),
                    ERROR_NOT_IN_VIOLATION,
                )?;

                let liquidator = SubAccount::new(caller.clone(), *sub_account);
                let opportunity = self.liquidation_opportunity(
                    violator,
                    &liquidator,
                    underlying,
                    collateral,
                    cache,
                );
                let yield_amount = match repay {
                    AmountSpec::Max => opportunity.yield_amount.clone(),
                    AmountSpec::Exact(native) => {
                        let requested = self.checked_encode(native, underlying, cache)?;
                        check(
                            requested <= opportunity.repay,
                            ERROR_EXCESSIVE_REPAY_AMOUNT,
                        )?;
                        if requested == opportunity.repay {
                            opportunity.yield_amount.clone()
                        } else {
                            self.mul_down(
                                &requested,
                                &opportunity.conversion_rate,
                                common_constants::WAD_PRECISION,
                            )
                        }
                    },
                };
                let min = self.checked_encode(min_yield, collateral, cache)?;
                check(min <= yield_amount, ERROR_MIN_YIELD)
            },
            BatchOperation::Touch { asset } => {
                check(self.is_activated(asset), ERROR_MARKET_NOT_ACTIVATED)
            },
        }
    }

    /// Health of `account` once `delta` is applied, left to the end of the
    /// batch for deferred accounts.
    fn check_health_after(
        &self,
        account: &SubAccount<Self::Api>,
        delta: risk::PositionDelta<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> CheckResult {
        if cache.is_deferred(account) {
            return Ok(());
        }

        let liquidity = self.simulate_liquidity(account, Some(&delta), cache);
        self.liquidity_violation(&liquidity)
    }

    fn is_activated(&self, asset: &EgldOrEsdtTokenIdentifier) -> bool {
        !self.markets(asset).is_empty()
    }

    fn check_can_enter(
        &self,
        account: &SubAccount<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> CheckResult {
        let entered = self.entered_markets(account);
        check(
            entered.contains(asset) || entered.len() < MAX_ENTERED_MARKETS,
            ERROR_TOO_MANY_ENTERED_MARKETS,
        )
    }

    /// Non-zero native amount of `asset` in internal units.
    fn checked_encode(
        &self,
        amount: &BigUint,
        asset: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> Result<ManagedDecimal<Self::Api, NumDecimals>, &'static [u8]> {
        check(amount > &BigUint::zero(), ERROR_AMOUNT_ZERO)?;

        let decimals = cache.get_cached_market_state(asset).decimals;
        let factor = BigUint::from(10u64).pow((INTERNAL_DECIMALS - decimals) as u32);
        let scaled = amount * &factor;
        check(
            scaled <= BigUint::from(MAX_SANE_AMOUNT),
            ERROR_AMOUNT_TOO_LARGE_TO_ENCODE,
        )?;

        Ok(self.to_decimal_wad(scaled))
    }
}
