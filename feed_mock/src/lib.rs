#![no_std]

multiversx_sc::imports!();

/// Test double for the external price collaborators: a push feed
/// (`latestAnswer`/`latestTimestamp`), a custom adapter (`getPrice`) and an
/// exchange-rate index source (`getExchangeRate`).
#[multiversx_sc::contract]
pub trait FeedMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setAnswer)]
    fn set_answer(&self, answer: BigInt, timestamp: u64) {
        self.answer().set(answer);
        self.answer_timestamp().set(timestamp);
    }

    #[view(latestAnswer)]
    fn latest_answer(&self) -> BigInt {
        self.answer().get()
    }

    #[view(latestTimestamp)]
    fn latest_timestamp(&self) -> u64 {
        self.answer_timestamp().get()
    }

    #[endpoint(setAdapterPrice)]
    fn set_adapter_price(&self, asset: EgldOrEsdtTokenIdentifier, price: BigUint, timestamp: u64) {
        self.adapter_price(&asset).set((price, timestamp));
    }

    // Fails unless the caller sent the lookup word it was configured with
    #[view(getPrice)]
    fn get_price(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        lookup_param: u32,
    ) -> MultiValue2<BigUint, u64> {
        let expected = self.expected_lookup_param().get();
        require!(
            expected == 0 || expected == lookup_param,
            "unexpected lookup param"
        );

        let (price, timestamp) = self.adapter_price(&asset).get();
        (price, timestamp).into()
    }

    #[endpoint(setExpectedLookupParam)]
    fn set_expected_lookup_param(&self, lookup_param: u32) {
        self.expected_lookup_param().set(lookup_param);
    }

    #[endpoint(setExchangeRate)]
    fn set_exchange_rate(&self, rate: BigUint) {
        self.exchange_rate().set(rate);
    }

    /// RAY
    #[view(getExchangeRate)]
    #[storage_mapper("exchange_rate")]
    fn exchange_rate(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("answer")]
    fn answer(&self) -> SingleValueMapper<BigInt>;

    #[storage_mapper("answer_timestamp")]
    fn answer_timestamp(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("adapter_price")]
    fn adapter_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<(BigUint, u64)>;

    #[storage_mapper("expected_lookup_param")]
    fn expected_lookup_param(&self) -> SingleValueMapper<u32>;
}
