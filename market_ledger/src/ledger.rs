multiversx_sc::imports!();

use common_constants::{INITIAL_RESERVES, WAD_PRECISION};
use common_errors::{
    ERROR_AMOUNT_TOO_LARGE, ERROR_AMOUNT_ZERO, ERROR_INSUFFICIENT_ALLOWANCE,
    ERROR_INSUFFICIENT_BALANCE, ERROR_INSUFFICIENT_PAYMENT, ERROR_INSUFFICIENT_POOL_SIZE,
    ERROR_INSUFFICIENT_RESERVES, ERROR_INVALID_RESERVE_FEE, ERROR_NO_LIABILITY,
    ERROR_REPAY_TOO_MUCH, ERROR_SELF_APPROVAL, ERROR_SELF_TRANSFER,
};
use common_structs::{AmountSpec, InterestRateModel, MarketState, SubAccount};

use crate::{cache::Cache, storage, utils};

/// Balance changing operations of the market. Every endpoint accrues the
/// market first, applies the operation, then recomputes the stored rate.
#[multiversx_sc::module]
pub trait LedgerModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_math::codec::AmountCodecModule
    + common_rates::InterestRates
{
    /// Accrues interest up to the current block and refreshes the rate.
    #[endpoint(touch)]
    fn touch(&self) -> MarketState<Self::Api> {
        self.require_controller();
        let mut cache = Cache::new(self);

        self.accrue(&mut cache);
        self.update_interest_rate(&mut cache);
        self.emit_market_state(&cache);

        cache.state.clone()
    }

    /// Credits the payment to `account` as scaled balance, rounded down.
    ///
    /// Returns the scaled amount minted.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self, account: SubAccount<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_controller();
        let mut cache = Cache::new(self);
        let amount = self.get_payment_amount(&cache);

        self.accrue(&mut cache);

        let internal = self.encode_amount(&amount, cache.decimals());
        let scaled = self.underlying_to_balance_down(&cache.state, &internal);
        require!(scaled > self.wad_zero(), ERROR_AMOUNT_ZERO);

        let balance = cache.scaled_balance(&account) + scaled.clone();
        cache.set_scaled_balance(&account, balance);
        cache.state.total_balances += &scaled;
        cache.state.pool_size += &internal;
        self.require_sane_totals(&cache);

        self.update_interest_rate(&mut cache);
        self.deposit_event(&cache.asset, &account, &internal, &scaled);
        self.emit_market_state(&cache);

        scaled
    }

    /// Releases underlying from `account` to `to`. The scaled balance
    /// removed is rounded up.
    ///
    /// Returns the native amount sent.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        account: SubAccount<Self::Api>,
        to: ManagedAddress,
        amount: AmountSpec<Self::Api>,
    ) -> BigUint {
        self.require_controller();
        let mut cache = Cache::new(self);
        self.accrue(&mut cache);

        let balance = cache.scaled_balance(&account);
        let (native, scaled) = match amount {
            AmountSpec::Max => {
                let underlying = self.balance_to_underlying(&cache.state, &balance);
                (self.decode_amount(&underlying, cache.decimals()), balance.clone())
            },
            AmountSpec::Exact(native) => {
                let internal = self.encode_amount(&native, cache.decimals());
                let scaled = self.underlying_to_balance_up(&cache.state, &internal);
                require!(scaled <= balance, ERROR_INSUFFICIENT_BALANCE);
                (native, scaled)
            },
        };
        require!(native > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let internal = self.encode_amount(&native, cache.decimals());
        require!(
            internal <= cache.state.pool_size,
            ERROR_INSUFFICIENT_POOL_SIZE
        );

        cache.set_scaled_balance(&account, balance - scaled.clone());
        cache.state.total_balances -= &scaled;
        cache.state.pool_size -= &internal;

        self.update_interest_rate(&mut cache);
        self.send_asset(&cache, &native, &to);
        self.withdraw_event(&cache.asset, &account, &to, &internal, &scaled);
        self.emit_market_state(&cache);

        native
    }

    /// Sends `amount` of cash to `to` and records it as debt of `account`.
    #[endpoint(borrow)]
    fn borrow(&self, account: SubAccount<Self::Api>, to: ManagedAddress, amount: BigUint) {
        self.require_controller();
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let mut cache = Cache::new(self);
        self.accrue(&mut cache);

        let internal = self.encode_amount(&amount, cache.decimals());
        require!(
            internal <= cache.state.pool_size,
            ERROR_INSUFFICIENT_POOL_SIZE
        );

        let debt = self.increase_debt(&mut cache, &account, &internal);
        cache.state.pool_size -= &internal;

        self.update_interest_rate(&mut cache);
        self.send_asset(&cache, &amount, &to);
        self.borrow_event(&cache.asset, &account, &to, &debt);
        self.emit_market_state(&cache);
    }

    /// Repays debt of `account` with the call payment.
    ///
    /// `Max` repays the whole debt, rounded up to the native unit, and refunds
    /// the excess to `refund_to`. An exact amount above the debt is rejected.
    ///
    /// Returns the native amount repaid.
    #[payable]
    #[endpoint(repay)]
    fn repay(
        &self,
        account: SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
        refund_to: ManagedAddress,
    ) -> BigUint {
        self.require_controller();
        let mut cache = Cache::new(self);
        let paid = self.get_payment_amount(&cache);

        self.accrue(&mut cache);

        let owed = self.current_debt(
            &cache.user_debt(&account),
            &cache.state.interest_accumulator,
        );
        require!(owed > self.ray_zero(), ERROR_NO_LIABILITY);
        let owed_native = self.decode_amount_up(&self.debt_to_internal(&owed), cache.decimals());

        let repaid = match amount {
            AmountSpec::Max => {
                if paid < owed_native {
                    paid.clone()
                } else {
                    owed_native.clone()
                }
            },
            AmountSpec::Exact(requested) => {
                require!(requested <= paid, ERROR_INSUFFICIENT_PAYMENT);
                require!(requested <= owed_native, ERROR_REPAY_TOO_MUCH);
                requested
            },
        };
        require!(repaid > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let internal = self.encode_amount(&repaid, cache.decimals());
        let removed = if repaid == owed_native {
            owed
        } else {
            self.ray_from_internal(&internal)
        };
        self.decrease_debt(&mut cache, &account, &removed);
        cache.state.pool_size += &internal;
        self.require_sane_totals(&cache);

        self.update_interest_rate(&mut cache);

        let refund = &paid - &repaid;
        if refund > BigUint::zero() {
            self.send_asset(&cache, &refund, &refund_to);
        }

        self.repay_event(&cache.asset, &account, &internal);
        self.emit_market_state(&cache);

        repaid
    }

    /// Self-collateralised leverage: credits `amount` as balance and records
    /// the same amount as debt without moving any token.
    #[endpoint(mint)]
    fn mint(&self, account: SubAccount<Self::Api>, amount: BigUint) {
        self.require_controller();
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let mut cache = Cache::new(self);
        self.accrue(&mut cache);

        let internal = self.encode_amount(&amount, cache.decimals());
        let scaled = self.underlying_to_balance_down(&cache.state, &internal);

        let balance = cache.scaled_balance(&account) + scaled.clone();
        cache.set_scaled_balance(&account, balance);
        cache.state.total_balances += &scaled;
        self.increase_debt(&mut cache, &account, &internal);
        self.require_sane_totals(&cache);

        self.update_interest_rate(&mut cache);
        self.mint_event(&cache.asset, &account, &internal);
        self.emit_market_state(&cache);
    }

    /// Unwinds balance and debt of `account` together. `Max` burns the
    /// smaller of the two.
    ///
    /// Returns the native amount burnt.
    #[endpoint(burn)]
    fn burn(&self, account: SubAccount<Self::Api>, amount: AmountSpec<Self::Api>) -> BigUint {
        self.require_controller();
        let mut cache = Cache::new(self);
        self.accrue(&mut cache);

        let balance = cache.scaled_balance(&account);
        let owed = self.current_debt(
            &cache.user_debt(&account),
            &cache.state.interest_accumulator,
        );
        let owed_internal = self.debt_to_internal(&owed);
        let balance_internal = self.balance_to_underlying(&cache.state, &balance);

        let internal = match amount {
            AmountSpec::Max => self.get_min(owed_internal.clone(), balance_internal),
            AmountSpec::Exact(native) => {
                let internal = self.encode_amount(&native, cache.decimals());
                require!(internal <= owed_internal, ERROR_REPAY_TOO_MUCH);
                require!(internal <= balance_internal, ERROR_INSUFFICIENT_BALANCE);
                internal
            },
        };
        require!(internal > self.wad_zero(), ERROR_AMOUNT_ZERO);

        let scaled = self.get_min(
            self.underlying_to_balance_up(&cache.state, &internal),
            balance.clone(),
        );
        let removed = if internal == owed_internal {
            owed
        } else {
            self.ray_from_internal(&internal)
        };

        cache.set_scaled_balance(&account, balance - scaled.clone());
        cache.state.total_balances -= &scaled;
        self.decrease_debt(&mut cache, &account, &removed);

        self.update_interest_rate(&mut cache);
        self.burn_event(&cache.asset, &account, &internal);
        self.emit_market_state(&cache);

        self.decode_amount(&internal, cache.decimals())
    }

    /// Moves scaled balance between sub-accounts.
    ///
    /// When `spender` is given and differs from `from`, the move consumes the
    /// allowance `from` granted to it. Returns the scaled amount moved.
    #[endpoint(transferBalance)]
    fn transfer_balance(
        &self,
        from: SubAccount<Self::Api>,
        to: SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
        spender: OptionalValue<SubAccount<Self::Api>>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_controller();
        require!(from != to, ERROR_SELF_TRANSFER);

        let mut cache = Cache::new(self);
        self.accrue(&mut cache);

        let from_balance = cache.scaled_balance(&from);
        let scaled = match amount {
            AmountSpec::Max => from_balance.clone(),
            AmountSpec::Exact(native) => {
                let internal = self.encode_amount(&native, cache.decimals());
                self.underlying_to_balance_up(&cache.state, &internal)
            },
        };
        require!(scaled > self.wad_zero(), ERROR_AMOUNT_ZERO);
        require!(scaled <= from_balance, ERROR_INSUFFICIENT_BALANCE);

        if let Some(spender) = spender.into_option() {
            if spender != from {
                let value = self.balance_to_underlying(&cache.state, &scaled);
                self.consume_allowance(&self.allowance(&from, &spender), &value);
            }
        }

        cache.set_scaled_balance(&from, from_balance - scaled.clone());
        let to_balance = cache.scaled_balance(&to) + scaled.clone();
        cache.set_scaled_balance(&to, to_balance);

        self.update_interest_rate(&mut cache);
        self.transfer_balance_event(&cache.asset, &from, &to, &scaled);
        self.emit_market_state(&cache);

        scaled
    }

    /// Moves debt from `from` onto `to`.
    ///
    /// When `spender` is given and differs from `to`, the move consumes the
    /// debt allowance `to` granted to it. Returns the debt moved, RAY.
    #[endpoint(transferDebt)]
    fn transfer_debt(
        &self,
        from: SubAccount<Self::Api>,
        to: SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
        spender: OptionalValue<SubAccount<Self::Api>>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_controller();
        require!(from != to, ERROR_SELF_TRANSFER);

        let mut cache = Cache::new(self);
        self.accrue(&mut cache);

        let from_debt = self.current_debt(
            &cache.user_debt(&from),
            &cache.state.interest_accumulator,
        );
        let moved = match amount {
            AmountSpec::Max => from_debt.clone(),
            AmountSpec::Exact(native) => {
                let internal = self.encode_amount(&native, cache.decimals());
                let requested = self.ray_from_internal(&internal);
                if requested > from_debt && self.debt_to_internal(&from_debt) == internal {
                    // rounding dust of a full transfer
                    from_debt.clone()
                } else {
                    requested
                }
            },
        };
        require!(moved > self.ray_zero(), ERROR_AMOUNT_ZERO);
        require!(moved <= from_debt, ERROR_INSUFFICIENT_BALANCE);

        if let Some(spender) = spender.into_option() {
            if spender != to {
                let value = self.debt_to_internal(&moved);
                self.consume_allowance(&self.debt_allowance(&to, &spender), &value);
            }
        }

        let to_debt = self.current_debt(&cache.user_debt(&to), &cache.state.interest_accumulator);
        cache.set_user_debt(&from, from_debt - moved.clone());
        cache.set_user_debt(&to, to_debt + moved.clone());

        self.update_interest_rate(&mut cache);
        self.transfer_debt_event(&cache.asset, &from, &to, &moved);
        self.emit_market_state(&cache);

        moved
    }

    /// Lets `spender` move up to `amount` (native) out of the balance of `owner`.
    #[endpoint(approve)]
    fn approve(&self, owner: SubAccount<Self::Api>, spender: SubAccount<Self::Api>, amount: BigUint) {
        self.require_controller();
        require!(owner != spender, ERROR_SELF_APPROVAL);

        let decimals = self.market_state().get().decimals;
        let internal = self.encode_amount(&amount, decimals);
        self.allowance(&owner, &spender).set(&internal);

        self.approval_event(&self.asset().get(), &owner, &spender, false, &internal);
    }

    /// Lets `spender` move up to `amount` (native) of debt onto `owner`.
    #[endpoint(approveDebt)]
    fn approve_debt(
        &self,
        owner: SubAccount<Self::Api>,
        spender: SubAccount<Self::Api>,
        amount: BigUint,
    ) {
        self.require_controller();
        require!(owner != spender, ERROR_SELF_APPROVAL);

        let decimals = self.market_state().get().decimals;
        let internal = self.encode_amount(&amount, decimals);
        self.debt_allowance(&owner, &spender).set(&internal);

        self.approval_event(&self.asset().get(), &owner, &spender, true, &internal);
    }

    /// Moves reserve balance above `INITIAL_RESERVES` into `recipient`.
    /// `Exact` amounts are expressed in native decimals of the scaled balance.
    ///
    /// Returns the scaled amount moved.
    #[endpoint(convertReserves)]
    fn convert_reserves(
        &self,
        recipient: SubAccount<Self::Api>,
        amount: AmountSpec<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_controller();
        let mut cache = Cache::new(self);
        self.accrue(&mut cache);

        let floor = self.to_decimal_wad(BigUint::from(INITIAL_RESERVES));
        let available = self.saturating_sub(&cache.state.reserve_balance, &floor);

        let scaled = match amount {
            AmountSpec::Max => available.clone(),
            AmountSpec::Exact(native) => self.encode_amount(&native, cache.decimals()),
        };
        require!(scaled > self.wad_zero(), ERROR_AMOUNT_ZERO);
        require!(scaled <= available, ERROR_INSUFFICIENT_RESERVES);

        cache.state.reserve_balance -= &scaled;
        let balance = cache.scaled_balance(&recipient) + scaled.clone();
        cache.set_scaled_balance(&recipient, balance);

        self.update_interest_rate(&mut cache);
        self.reserves_converted_event(&cache.asset, &recipient, &scaled);
        self.emit_market_state(&cache);

        scaled
    }

    /// Sets the share of interest minted to reserves, BPS. Interest accrued
    /// so far is settled at the previous fee.
    #[endpoint(setReserveFee)]
    fn set_reserve_fee(&self, fee: BigUint) {
        self.require_controller();
        let fee = self.to_decimal_bps(fee);
        require!(fee <= self.bps(), ERROR_INVALID_RESERVE_FEE);

        let mut cache = Cache::new(self);
        self.accrue(&mut cache);

        cache.state.reserve_fee = fee;

        self.update_interest_rate(&mut cache);
        self.reserve_fee_event(&cache.asset, &cache.state.reserve_fee);
        self.emit_market_state(&cache);
    }

    /// Replaces the rate model. Interest accrued so far is settled at the
    /// previous rate.
    #[endpoint(setInterestRateModel)]
    fn set_interest_rate_model(&self, model: InterestRateModel<Self::Api>) {
        self.require_controller();
        self.validate_interest_rate_model(&model);

        let mut cache = Cache::new(self);
        self.accrue(&mut cache);

        self.interest_rate_model().set(&model);
        self.reset_index_snapshot(&model, cache.timestamp);
        cache.model = model;

        self.update_interest_rate(&mut cache);
        self.interest_rate_model_event(&cache.asset, &cache.model);
        self.emit_market_state(&cache);
    }

    /// Adds `internal` to the debt of `account`. Returns the new debt, RAY.
    fn increase_debt(
        &self,
        cache: &mut Cache<Self>,
        account: &SubAccount<Self::Api>,
        internal: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let added = self.ray_from_internal(internal);
        let owed = self.current_debt(&cache.user_debt(account), &cache.state.interest_accumulator);
        let debt = owed + added.clone();

        cache.set_user_debt(account, debt.clone());
        cache.state.total_borrows += &added;

        debt
    }

    /// Removes `removed` (RAY) from the debt of `account`. Rounding can make
    /// user debts exceed the market total, which is floored at zero.
    fn decrease_debt(
        &self,
        cache: &mut Cache<Self>,
        account: &SubAccount<Self::Api>,
        removed: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let owed = self.current_debt(&cache.user_debt(account), &cache.state.interest_accumulator);
        let remaining = self.saturating_sub(&owed, removed);

        cache.set_user_debt(account, remaining);
        cache.state.total_borrows = self.saturating_sub(&cache.state.total_borrows, removed);
    }

    fn consume_allowance(
        &self,
        mapper: &SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        require!(!mapper.is_empty(), ERROR_INSUFFICIENT_ALLOWANCE);
        let allowed = mapper.get();
        require!(value <= &allowed, ERROR_INSUFFICIENT_ALLOWANCE);

        mapper.set(allowed - value.clone());
    }

    fn require_sane_totals(&self, cache: &Cache<Self>) {
        require!(
            self.is_sane_amount(&cache.state.pool_size)
                && self.is_sane_amount(&cache.state.total_balances)
                && self.is_sane_amount(&cache.state.total_borrows.rescale(WAD_PRECISION)),
            ERROR_AMOUNT_TOO_LARGE
        );
    }
}
