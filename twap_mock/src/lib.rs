#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Observation {
    pub timestamp: u64,
    pub tick_cumulative: i64,
}

/// Concentrated liquidity pool double with an oracle of tick cumulatives.
///
/// The same code also plays the factory: `registerPool` / `getPool` map a
/// `(token_a, token_b, fee)` triple to a pool address.
#[multiversx_sc::contract]
pub trait TwapMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(registerPool)]
    fn register_pool(
        &self,
        token_a: EgldOrEsdtTokenIdentifier,
        token_b: EgldOrEsdtTokenIdentifier,
        fee: u32,
        pool: ManagedAddress,
    ) {
        self.pools(&token_a, &token_b, fee).set(&pool);
        self.pools(&token_b, &token_a, fee).set(&pool);
    }

    /// Zero address when no pool is registered.
    #[view(getPool)]
    fn get_pool(
        &self,
        token_a: EgldOrEsdtTokenIdentifier,
        token_b: EgldOrEsdtTokenIdentifier,
        fee: u32,
    ) -> ManagedAddress {
        let mapper = self.pools(&token_a, &token_b, fee);
        if mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            mapper.get()
        }
    }

    #[endpoint(setTokens)]
    fn set_tokens(&self, token0: EgldOrEsdtTokenIdentifier, token1: EgldOrEsdtTokenIdentifier) {
        self.token0().set(token0);
        self.token1().set(token1);
    }

    #[endpoint(setCurrentTick)]
    fn set_current_tick(&self, tick: i64) {
        self.current_tick().set(tick);
    }

    /// Observations must be pushed in increasing timestamp order.
    #[endpoint(pushObservation)]
    fn push_observation(&self, timestamp: u64, tick_cumulative: i64) {
        let len = self.observations().len();
        if len > 0 {
            require!(
                self.observations().get(len).timestamp < timestamp,
                "observations out of order"
            );
        }
        self.observations().push(&Observation {
            timestamp,
            tick_cumulative,
        });
    }

    #[view(getOldestObservationTimestamp)]
    fn get_oldest_observation_timestamp(&self) -> u64 {
        if self.observations().is_empty() {
            return 0;
        }
        self.observations().get(1).timestamp
    }

    /// Tick cumulative `seconds_ago` before the current block, extrapolated
    /// from the last observation with the current tick and interpolated
    /// between observations otherwise.
    #[view(getTickCumulative)]
    fn get_tick_cumulative(&self, seconds_ago: u64) -> i64 {
        let observations = self.observations();
        let len = observations.len();
        require!(len > 0, "no observations");

        let now = self.blockchain().get_block_timestamp();
        require!(seconds_ago <= now, "OLD");
        let target = now - seconds_ago;

        let last = observations.get(len);
        if target >= last.timestamp {
            let elapsed = (target - last.timestamp) as i64;
            return last.tick_cumulative + self.current_tick().get() * elapsed;
        }

        let first = observations.get(1);
        require!(target >= first.timestamp, "OLD");

        let mut before = first;
        for index in 2..=len {
            let after = observations.get(index);
            if after.timestamp > target {
                let span = (after.timestamp - before.timestamp) as i64;
                let offset = (target - before.timestamp) as i64;
                let delta = after.tick_cumulative - before.tick_cumulative;
                return before.tick_cumulative + delta * offset / span;
            }
            before = after;
        }

        before.tick_cumulative
    }

    #[view(token0)]
    #[storage_mapper("token0")]
    fn token0(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(token1)]
    #[storage_mapper("token1")]
    fn token1(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getCurrentTick)]
    #[storage_mapper("current_tick")]
    fn current_tick(&self) -> SingleValueMapper<i64>;

    #[storage_mapper("observations")]
    fn observations(&self) -> VecMapper<Observation>;

    #[storage_mapper("pools")]
    fn pools(
        &self,
        token_a: &EgldOrEsdtTokenIdentifier,
        token_b: &EgldOrEsdtTokenIdentifier,
        fee: u32,
    ) -> SingleValueMapper<ManagedAddress>;
}
