#![no_std]

pub static ERROR_AMOUNT_TOO_LARGE_TO_ENCODE: &[u8] = b"Amount too large to encode.";

pub static ERROR_AMOUNT_TOO_LARGE: &[u8] = b"Amount too large.";

pub static ERROR_AMOUNT_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Insufficient balance.";

pub static ERROR_INSUFFICIENT_POOL_SIZE: &[u8] = b"Insufficient pool size.";

pub static ERROR_INSUFFICIENT_ALLOWANCE: &[u8] = b"Insufficient allowance.";

pub static ERROR_INSUFFICIENT_RESERVES: &[u8] = b"Insufficient reserves.";

pub static ERROR_REPAY_TOO_MUCH: &[u8] = b"Repay amount exceeds the outstanding debt.";

pub static ERROR_SELF_TRANSFER: &[u8] = b"Transfer to the same account.";

pub static ERROR_SELF_APPROVAL: &[u8] = b"Approval of the same account.";

pub static ERROR_SENDER_NOT_TRUSTED: &[u8] = b"Sender not trusted.";

pub static ERROR_MARKET_NOT_ACTIVATED: &[u8] = b"Market not activated.";

pub static ERROR_MARKET_ALREADY_ACTIVATED: &[u8] = b"Market already activated.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Market ledger template is empty.";

pub static ERROR_INVALID_DECIMALS: &[u8] = b"Invalid asset decimals.";

pub static ERROR_INVALID_FACTOR: &[u8] = b"Invalid risk factor.";

pub static ERROR_INVALID_RESERVE_FEE: &[u8] = b"Invalid reserve fee.";

pub static ERROR_INVALID_RATE_MODEL: &[u8] = b"Invalid interest rate model.";

pub static ERROR_UNABLE_TO_GET_PRICE: &[u8] = b"Unable to get price.";

pub static ERROR_NESTED_PRICE_FORWARDING: &[u8] = b"Nested price forwarding.";

pub static ERROR_UNKNOWN_PRICING_TYPE: &[u8] = b"Unknown pricing type.";

pub static ERROR_PRICE_FEED_NOT_INITIALIZED: &[u8] = b"Price feed not initialized.";

pub static ERROR_FALLBACK_POOL_FEE_NOT_SPECIFIED: &[u8] = b"Fallback pool fee not specified.";

pub static ERROR_FORWARD_TARGET_NOT_SPECIFIED: &[u8] = b"Forwarding target not specified.";

pub static ERROR_TWAP_FACTORY_NOT_SET: &[u8] = b"TWAP factory not set.";

pub static ERROR_POOL_NOT_FOUND: &[u8] = b"TWAP pool not found.";

pub static ERROR_COLLATERAL_VIOLATION: &[u8] = b"Collateral violation.";

pub static ERROR_BORROW_ISOLATION_VIOLATION: &[u8] = b"Borrow isolation violation.";

pub static ERROR_NOT_IN_VIOLATION: &[u8] = b"Account not in violation.";

pub static ERROR_SELF_LIQUIDATION: &[u8] = b"Self liquidation is not allowed.";

pub static ERROR_NO_LIABILITY: &[u8] = b"Violator has no liability in this market.";

pub static ERROR_COLLATERAL_NOT_ENTERED: &[u8] = b"Collateral market not entered by the violator.";

pub static ERROR_EXCESSIVE_REPAY_AMOUNT: &[u8] = b"Excessive repay amount.";

pub static ERROR_MIN_YIELD: &[u8] = b"Liquidation yield below the requested minimum.";

pub static ERROR_TOO_MANY_ENTERED_MARKETS: &[u8] = b"Too many entered markets.";

pub static ERROR_OUTSTANDING_BORROW: &[u8] = b"Outstanding borrow in this market.";

pub static ERROR_INVALID_SUB_ACCOUNT_OWNER: &[u8] = b"Caller does not own this sub-account.";

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Payment does not match the market asset.";

pub static ERROR_INSUFFICIENT_PAYMENT: &[u8] = b"Payment lower than the repay amount.";

pub static ERROR_BATCH_EMPTY: &[u8] = b"Batch has no items.";

pub static ERROR_PROTOCOL_PAUSED: &[u8] = b"Protocol is paused.";
