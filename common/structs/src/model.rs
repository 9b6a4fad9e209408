#![no_std]

use common_constants::{
    FEED_DECIMALS_SHIFT, FEED_TIMEOUT_MASK, PRICING_TYPE_CUSTOM, PRICING_TYPE_FEED,
    PRICING_TYPE_FORWARDED, PRICING_TYPE_PEGGED, PRICING_TYPE_TWAP,
};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// An independent risk unit: a wallet plus an index in `0..=255`.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Eq, Debug,
)]
pub struct SubAccount<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub index: u8,
}

impl<M: ManagedTypeApi> SubAccount<M> {
    pub fn new(owner: ManagedAddress<M>, index: u8) -> Self {
        SubAccount { owner, index }
    }

    pub fn is_owned_by(&self, address: &ManagedAddress<M>) -> bool {
        &self.owner == address
    }
}

/// Amount argument of user operations. `Max` resolves to the full balance
/// or debt at execution time instead of a literal number.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub enum AmountSpec<M: ManagedTypeApi> {
    Exact(BigUint<M>),
    Max,
}

impl<M: ManagedTypeApi> AmountSpec<M> {
    pub fn is_max(&self) -> bool {
        matches!(self, AmountSpec::Max)
    }
}

/// Debt of one sub-account, valid at the stored accumulator snapshot.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct UserDebt<M: ManagedTypeApi> {
    /// RAY precision, internal unit
    pub owed: ManagedDecimal<M, NumDecimals>,
    pub accumulator: ManagedDecimal<M, NumDecimals>,
}

/// Global state of a market ledger.
///
/// - `total_balances`, `pool_size`, `reserve_balance` are internal amounts (WAD).
/// - `total_borrows` carries the extra debt precision (RAY).
/// - `interest_accumulator` and `interest_rate` are RAY, the rate per second.
/// - `reserve_fee` is BPS.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct MarketState<M: ManagedTypeApi> {
    pub total_balances: ManagedDecimal<M, NumDecimals>,
    pub total_borrows: ManagedDecimal<M, NumDecimals>,
    pub pool_size: ManagedDecimal<M, NumDecimals>,
    pub reserve_balance: ManagedDecimal<M, NumDecimals>,
    pub interest_accumulator: ManagedDecimal<M, NumDecimals>,
    pub interest_rate: ManagedDecimal<M, NumDecimals>,
    pub reserve_fee: ManagedDecimal<M, NumDecimals>,
    pub last_update: u64,
    pub decimals: usize,
}

/// Last index observed by a class model, used to derive the yield of the
/// next period.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct IndexSnapshot<M: ManagedTypeApi> {
    pub index: ManagedDecimal<M, NumDecimals>,
    pub timestamp: u64,
}

/// Rate strategies. Annual rates and utilizations are RAY.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum InterestRateModel<M: ManagedTypeApi> {
    Zero,
    Fixed {
        annual_rate: ManagedDecimal<M, NumDecimals>,
    },
    LinearKinked {
        base_rate: ManagedDecimal<M, NumDecimals>,
        kink_rate: ManagedDecimal<M, NumDecimals>,
        max_rate: ManagedDecimal<M, NumDecimals>,
        kink_utilization: ManagedDecimal<M, NumDecimals>,
    },
    /// Tracks the growth of an external exchange-rate index (e.g. a liquid
    /// staking token) and adds a utilization based spread.
    ClassIndex {
        source: ManagedAddress<M>,
        spread_rate: ManagedDecimal<M, NumDecimals>,
        max_rate: ManagedDecimal<M, NumDecimals>,
    },
}

impl<M: ManagedTypeApi> InterestRateModel<M> {
    pub fn index_source(&self) -> Option<&ManagedAddress<M>> {
        match self {
            InterestRateModel::ClassIndex { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Input of a class model computation, read by the ledger before calling the
/// pure rate function.
pub struct ClassIndexContext<M: ManagedTypeApi> {
    pub previous: IndexSnapshot<M>,
    pub current_index: ManagedDecimal<M, NumDecimals>,
    pub now: u64,
    pub cached_rate: ManagedDecimal<M, NumDecimals>,
}

/// How the price of an asset against the reference asset is obtained.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub enum PricingConfig<M: ManagedTypeApi> {
    Pegged,
    Twap { pool_fee: u32 },
    Feed { fallback_pool_fee: u32 },
    Custom { fallback_pool_fee: u32 },
    Forwarded { target: EgldOrEsdtTokenIdentifier<M> },
}

impl<M: ManagedTypeApi> PricingConfig<M> {
    pub fn pricing_type(&self) -> u8 {
        match self {
            PricingConfig::Pegged => PRICING_TYPE_PEGGED,
            PricingConfig::Twap { .. } => PRICING_TYPE_TWAP,
            PricingConfig::Forwarded { .. } => PRICING_TYPE_FORWARDED,
            PricingConfig::Feed { .. } => PRICING_TYPE_FEED,
            PricingConfig::Custom { .. } => PRICING_TYPE_CUSTOM,
        }
    }

    /// Fee tier of the pool used when the primary source fails. Zero means
    /// no fallback.
    pub fn fallback_pool_fee(&self) -> u32 {
        match self {
            PricingConfig::Feed { fallback_pool_fee } | PricingConfig::Custom { fallback_pool_fee } => {
                *fallback_pool_fee
            },
            _ => 0,
        }
    }

    pub fn is_forwarded(&self) -> bool {
        matches!(self, PricingConfig::Forwarded { .. })
    }

    pub fn requires_price_feed(&self) -> bool {
        matches!(self, PricingConfig::Feed { .. } | PricingConfig::Custom { .. })
    }
}

/// Risk parameters of an activated asset. Factors are BPS.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct AssetConfig<M: ManagedTypeApi> {
    pub collateral_factor: ManagedDecimal<M, NumDecimals>,
    pub borrow_factor: ManagedDecimal<M, NumDecimals>,
    pub borrow_isolated: bool,
    pub twap_window: u64,
    pub pricing: PricingConfig<M>,
}

impl<M: ManagedTypeApi> AssetConfig<M> {
    pub fn can_be_collateral(&self) -> bool {
        self.collateral_factor.into_raw_units() > &BigUint::zero()
    }
}

/// External feed or custom adapter attached to an asset.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct PriceFeedConfig<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub decimals: u8,
    pub timeout: u32,
}

impl<M: ManagedTypeApi> PriceFeedConfig<M> {
    /// Unpacks the `(decimals << 24) | timeout` governance word.
    pub fn from_packed(address: ManagedAddress<M>, params: u32) -> Self {
        PriceFeedConfig {
            address,
            decimals: (params >> FEED_DECIMALS_SHIFT) as u8,
            timeout: params & FEED_TIMEOUT_MASK,
        }
    }

    pub fn packed_params(&self) -> u32 {
        ((self.decimals as u32) << FEED_DECIMALS_SHIFT) | (self.timeout & FEED_TIMEOUT_MASK)
    }

    pub fn is_initialized(&self) -> bool {
        !self.address.is_zero() && self.decimals > 0 && self.timeout > 0
    }
}

/// Pair specific collateral factor (BPS) granted to a collateral when it
/// backs one particular liability.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct OverrideConfig<M: ManagedTypeApi> {
    pub enabled: bool,
    pub collateral_factor: ManagedDecimal<M, NumDecimals>,
}

/// Result of a price lookup, WAD per internal unit of the reference asset.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PriceQuote<M: ManagedTypeApi> {
    pub current: ManagedDecimal<M, NumDecimals>,
    pub twap: ManagedDecimal<M, NumDecimals>,
    pub twap_period: u64,
}

/// Risk adjusted totals of a sub-account, in reference asset units (WAD).
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct AccountLiquidity<M: ManagedTypeApi> {
    pub collateral_value: ManagedDecimal<M, NumDecimals>,
    pub liability_value: ManagedDecimal<M, NumDecimals>,
    pub override_collateral_value: ManagedDecimal<M, NumDecimals>,
    pub num_borrows: usize,
    pub borrow_isolated: bool,
}

/// Sizing of a liquidation. `repay` is an internal amount of the
/// liability asset, `yield_amount` an internal amount of the collateral.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct LiquidationOpportunity<M: ManagedTypeApi> {
    pub repay: ManagedDecimal<M, NumDecimals>,
    pub yield_amount: ManagedDecimal<M, NumDecimals>,
    pub health_score: ManagedDecimal<M, NumDecimals>,
    pub discount: ManagedDecimal<M, NumDecimals>,
    pub conversion_rate: ManagedDecimal<M, NumDecimals>,
}

/// One step of a batch.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct BatchItem<M: ManagedTypeApi> {
    pub allow_error: bool,
    pub operation: BatchOperation<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub enum BatchOperation<M: ManagedTypeApi> {
    EnterMarket {
        sub_account: u8,
        asset: EgldOrEsdtTokenIdentifier<M>,
    },
    ExitMarket {
        sub_account: u8,
        asset: EgldOrEsdtTokenIdentifier<M>,
    },
    Withdraw {
        sub_account: u8,
        asset: EgldOrEsdtTokenIdentifier<M>,
        amount: AmountSpec<M>,
    },
    Borrow {
        sub_account: u8,
        asset: EgldOrEsdtTokenIdentifier<M>,
        amount: BigUint<M>,
    },
    Mint {
        sub_account: u8,
        asset: EgldOrEsdtTokenIdentifier<M>,
        amount: BigUint<M>,
    },
    Burn {
        sub_account: u8,
        asset: EgldOrEsdtTokenIdentifier<M>,
        amount: AmountSpec<M>,
    },
    TransferBalance {
        asset: EgldOrEsdtTokenIdentifier<M>,
        from: SubAccount<M>,
        to: SubAccount<M>,
        amount: AmountSpec<M>,
    },
    TransferDebt {
        asset: EgldOrEsdtTokenIdentifier<M>,
        from: SubAccount<M>,
        to: SubAccount<M>,
        amount: AmountSpec<M>,
    },
    Liquidate {
        violator: SubAccount<M>,
        sub_account: u8,
        underlying: EgldOrEsdtTokenIdentifier<M>,
        collateral: EgldOrEsdtTokenIdentifier<M>,
        repay: AmountSpec<M>,
        min_yield: BigUint<M>,
    },
    Touch {
        asset: EgldOrEsdtTokenIdentifier<M>,
    },
}
