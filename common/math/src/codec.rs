use common_constants::{INTERNAL_DECIMALS, MAX_SANE_AMOUNT, WAD_PRECISION};
use common_errors::{ERROR_AMOUNT_TOO_LARGE_TO_ENCODE, ERROR_INVALID_DECIMALS};

multiversx_sc::imports!();

/// Conversion between native token amounts and the internal 18 decimal unit.
///
/// Every ledger field is kept in the internal unit so that assets with
/// different decimal counts can be valued against each other directly.
#[multiversx_sc::module]
pub trait AmountCodecModule: crate::SharedMathModule {
    /// Scales a native amount by `10^(18 - decimals)`.
    ///
    /// # Errors
    /// - `ERROR_INVALID_DECIMALS`: `decimals` above 18.
    /// - `ERROR_AMOUNT_TOO_LARGE_TO_ENCODE`: scaled amount above `2^112 - 1`.
    fn encode_amount(
        &self,
        amount: &BigUint,
        decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(decimals <= INTERNAL_DECIMALS, ERROR_INVALID_DECIMALS);

        let factor = BigUint::from(10u64).pow((INTERNAL_DECIMALS - decimals) as u32);
        let scaled = amount * &factor;
        require!(
            scaled <= BigUint::from(MAX_SANE_AMOUNT),
            ERROR_AMOUNT_TOO_LARGE_TO_ENCODE
        );

        self.to_decimal_wad(scaled)
    }

    /// Inverse of `encode_amount`, rounding down.
    fn decode_amount(
        &self,
        scaled: &ManagedDecimal<Self::Api, NumDecimals>,
        decimals: usize,
    ) -> BigUint {
        require!(decimals <= INTERNAL_DECIMALS, ERROR_INVALID_DECIMALS);

        let factor = BigUint::from(10u64).pow((INTERNAL_DECIMALS - decimals) as u32);
        scaled.rescale(WAD_PRECISION).into_raw_units() / &factor
    }

    /// Same as `decode_amount` but rounding up, for amounts a user has to pay.
    fn decode_amount_up(
        &self,
        scaled: &ManagedDecimal<Self::Api, NumDecimals>,
        decimals: usize,
    ) -> BigUint {
        require!(decimals <= INTERNAL_DECIMALS, ERROR_INVALID_DECIMALS);

        let factor = BigUint::from(10u64).pow((INTERNAL_DECIMALS - decimals) as u32);
        let rounding = &factor - &BigUint::from(1u64);
        (scaled.rescale(WAD_PRECISION).into_raw_units() + &rounding) / &factor
    }

    fn is_sane_amount(&self, scaled: &ManagedDecimal<Self::Api, NumDecimals>) -> bool {
        scaled.rescale(WAD_PRECISION).into_raw_units() <= &BigUint::from(MAX_SANE_AMOUNT)
    }
}
