#![no_std]

use core::cmp::Ordering;

use common_constants::{BPS, BPS_PRECISION, LN_2, RAY, RAY_PRECISION, WAD, WAD_PRECISION};

pub mod codec;

multiversx_sc::imports!();

/// Fixed-point helpers shared by every contract of the protocol.
///
/// Values are `ManagedDecimal`s tagged with their precision: RAY (27) for
/// rates, accumulators and debt, WAD (18) for internal amounts, prices and
/// values, BPS (4) for governance factors.
///
/// Three rounding flavours are provided:
/// - `*_half_up`: nearest, used where no party can profit from the direction.
/// - `*_down`: truncation, used for anything credited to a user.
/// - `*_up`: ceiling, used for anything a user owes or gives up.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    fn div_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;
        let denominator = scaled_b.into_raw_units();

        let half_denominator = denominator / &BigUint::from(2u64);
        let rounded_quotient = (numerator + half_denominator) / denominator;

        self.to_decimal(rounded_quotient, precision)
    }

    fn mul_down(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let product = a.rescale(precision).into_raw_units() * b.rescale(precision).into_raw_units();
        let scaled = BigUint::from(10u64).pow(precision as u32);

        self.to_decimal(product / scaled, precision)
    }

    fn mul_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let product = a.rescale(precision).into_raw_units() * b.rescale(precision).into_raw_units();
        let scaled = BigUint::from(10u64).pow(precision as u32);
        let rounding = &scaled - &BigUint::from(1u64);

        self.to_decimal((product + rounding) / scaled, precision)
    }

    fn div_down(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = a.rescale(precision).into_raw_units() * &scaled;
        let scaled_b = b.rescale(precision);

        self.to_decimal(numerator / scaled_b.into_raw_units(), precision)
    }

    fn div_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = a.rescale(precision).into_raw_units() * &scaled;
        let scaled_b = b.rescale(precision);
        let denominator = scaled_b.into_raw_units();
        let rounding = denominator - &BigUint::from(1u64);

        self.to_decimal((numerator + rounding) / denominator, precision)
    }

    /// Truncating rescale, the result never exceeds the input.
    fn rescale_down(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        value.rescale(new_precision)
    }

    /// Ceiling rescale, the result is never below the input.
    fn rescale_up(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();
        if new_precision >= old_precision {
            return value.rescale(new_precision);
        }

        let factor = BigUint::from(10u64).pow((old_precision - new_precision) as u32);
        let rounding = &factor - &BigUint::from(1u64);
        let rounded = (value.into_raw_units() + &rounding) / factor;

        ManagedDecimal::from_raw_units(rounded, new_precision)
    }

    fn rescale_half_up(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();
        let raw_value = value.into_raw_units();

        match new_precision.cmp(&old_precision) {
            Ordering::Equal => value.clone(),
            Ordering::Less => {
                let precision_diff = old_precision - new_precision;
                let factor = BigUint::from(10u64).pow(precision_diff as u32);
                let half_factor = &factor / 2u64;

                let rounded_downscaled_value = (raw_value + &half_factor) / factor;
                ManagedDecimal::from_raw_units(rounded_downscaled_value, new_precision)
            },
            Ordering::Greater => value.rescale(new_precision),
        }
    }

    /// Raises a RAY based value to an integer power by repeated squaring.
    ///
    /// Used to compound a per-second rate over `exponent` seconds:
    /// `(1 + rate) ^ exponent`. Each multiplication rounds half-up at RAY.
    fn rpow(
        &self,
        base: &ManagedDecimal<Self::Api, NumDecimals>,
        exponent: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut result = self.ray();
        let mut factor = base.rescale(RAY_PRECISION);
        let mut remaining = exponent;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = self.mul_half_up(&result, &factor, RAY_PRECISION);
            }
            remaining >>= 1;
            if remaining > 0 {
                factor = self.mul_half_up(&factor, &factor, RAY_PRECISION);
            }
        }

        result
    }

    /// Natural logarithm of a RAY value `x >= 1`, in RAY. Inputs below one return zero.
    ///
    /// The argument is first halved until it lies in `[1, 2)`, each halving
    /// adding `ln 2`, then `ln x = 2 * atanh((x - 1) / (x + 1))` is summed
    /// until the series terms vanish at RAY precision.
    fn ln_ray(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let one = self.ray();
        let mut x = value.rescale(RAY_PRECISION);
        if x <= one {
            return self.ray_zero();
        }

        let two = self.to_decimal_ray(BigUint::from(RAY) * 2u64);
        let halving = self.to_decimal(BigUint::from(2u64), 0);
        let ln_two = self.to_decimal_ray(BigUint::from(LN_2));

        let mut result = self.ray_zero();
        while x >= two {
            x = self.div_half_up(&x, &halving, RAY_PRECISION);
            result += &ln_two;
        }

        let z = self.div_half_up(&(x.clone() - one.clone()), &(x + one), RAY_PRECISION);
        let z_squared = self.mul_half_up(&z, &z, RAY_PRECISION);

        let zero = self.ray_zero();
        let mut series = self.ray_zero();
        let mut term = z;
        let mut denominator = 1u64;
        while term > zero && denominator < 256 {
            series += self.div_half_up(
                &term,
                &self.to_decimal(BigUint::from(denominator), 0),
                RAY_PRECISION,
            );
            term = self.mul_half_up(&term, &z_squared, RAY_PRECISION);
            denominator += 2;
        }

        result + series.clone() + series
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn to_decimal_ray(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn to_decimal_bps(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, BPS_PRECISION)
    }

    fn bps_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_bps(BigUint::zero())
    }

    fn wad_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn ray_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_ray(BigUint::zero())
    }

    fn ray(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(RAY), RAY_PRECISION)
    }

    fn wad(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn bps(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(BPS), BPS_PRECISION)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn get_min(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a < b {
            a
        } else {
            b
        }
    }

    fn get_max(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a > b {
            a
        } else {
            b
        }
    }
}
