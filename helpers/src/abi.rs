//! Published interfaces of the three demo contracts.
//!
//! Only the entries the scripts actually call are described here; the
//! contracts themselves are external artifacts and expose more than this.

use ethers::abi::Abi;

const ERC20_ABI: &str = r#"[
  {"type":"constructor","stateMutability":"nonpayable","inputs":[
    {"name":"name_","type":"string"},
    {"name":"symbol_","type":"string"},
    {"name":"decimals_","type":"uint8"}]},
  {"type":"function","name":"mint","stateMutability":"nonpayable","inputs":[
    {"name":"_to","type":"address"},
    {"name":"_amount","type":"uint256"}],
   "outputs":[{"name":"","type":"bool"}]},
  {"type":"function","name":"balanceOf","stateMutability":"view","inputs":[
    {"name":"account","type":"address"}],
   "outputs":[{"name":"","type":"uint256"}]},
  {"type":"function","name":"allowance","stateMutability":"view","inputs":[
    {"name":"owner","type":"address"},
    {"name":"spender","type":"address"}],
   "outputs":[{"name":"","type":"uint256"}]}
]"#;

const PAYMASTER_ABI: &str = r#"[
  {"type":"constructor","stateMutability":"nonpayable","inputs":[
    {"name":"_erc20","type":"address"}]},
  {"type":"function","name":"setDapiProxy","stateMutability":"nonpayable","inputs":[
    {"name":"_USDCproxy","type":"address"},
    {"name":"_ETHproxy","type":"address"}],
   "outputs":[]},
  {"type":"function","name":"readDapi","stateMutability":"view","inputs":[
    {"name":"_dapiProxy","type":"address"}],
   "outputs":[{"name":"","type":"uint256"}]}
]"#;

const GREETER_ABI: &str = r#"[
  {"type":"constructor","stateMutability":"nonpayable","inputs":[
    {"name":"_greeting","type":"string"}]},
  {"type":"function","name":"greet","stateMutability":"view","inputs":[],
   "outputs":[{"name":"","type":"string"}]},
  {"type":"function","name":"setGreeting","stateMutability":"nonpayable","inputs":[
    {"name":"_greeting","type":"string"}],
   "outputs":[]}
]"#;

pub fn erc20() -> Abi {
    serde_json::from_str(ERC20_ABI).expect("embedded ERC-20 ABI is valid")
}

pub fn paymaster() -> Abi {
    serde_json::from_str(PAYMASTER_ABI).expect("embedded paymaster ABI is valid")
}

pub fn greeter() -> Abi {
    serde_json::from_str(GREETER_ABI).expect("embedded greeter ABI is valid")
}
