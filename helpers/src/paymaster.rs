//! Approval-based fee sponsorship: parameter encoding and fee conversion.

use ethers::abi::{encode, Token};
use ethers::types::{Address, U256};
use ethers::utils::id;
use zksync_web3_rs::eip712::PaymasterParams;

use crate::error::Error;

/// Protocol default for the gas-per-pubdata limit on Era transactions.
pub const DEFAULT_GAS_PER_PUBDATA_LIMIT: u64 = 50_000;

/// Paymaster input for the `approvalBased` flow: the flow selector followed
/// by the ABI-encoded `(token, minimalAllowance, innerInput)` tail.
pub fn approval_based_input(
    token: Address,
    minimal_allowance: U256,
    inner_input: &[u8],
) -> Vec<u8> {
    let selector = id("approvalBased(address,uint256,bytes)");
    let tail = encode(&[
        Token::Address(token),
        Token::Uint(minimal_allowance),
        Token::Bytes(inner_input.to_vec()),
    ]);

    let mut input = Vec::with_capacity(4 + tail.len());
    input.extend_from_slice(&selector[..4]);
    input.extend_from_slice(&tail);
    input
}

/// Full sponsorship parameters for an approval-based paymaster. The inner
/// input is left empty; the testnet paymaster does not read it.
pub fn approval_based_params(
    paymaster: Address,
    token: Address,
    minimal_allowance: U256,
) -> PaymasterParams {
    PaymasterParams {
        paymaster,
        paymaster_input: approval_based_input(token, minimal_allowance, &[]).into(),
    }
}

/// Convert a native-currency fee into its token equivalent using two feed
/// readings taken in the same call:
/// `token_fee = native_fee × (native/quote) ÷ (token/quote)`.
pub fn token_fee_from_native(
    native_fee: U256,
    native_quote: U256,
    token_quote: U256,
) -> Result<U256, Error> {
    if token_quote.is_zero() {
        return Err(Error::ZeroPriceFeed);
    }
    native_fee
        .checked_mul(native_quote)
        .map(|scaled| scaled / token_quote)
        .ok_or(Error::FeeOverflow)
}
