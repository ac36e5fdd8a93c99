use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Amount is not positive or exceeds the caller's share balance
    InsufficientBalance = 1,

    /// Nothing to pull from either reserve asset
    ZeroAmount = 2,

    /// Proportions are undefined while both reserves are empty
    DivisionByEmptyVault = 3,

    /// Arithmetic overflow or underflow occurred
    ArithmeticOverflow = 4,

    /// Both reserve roles point to the same asset contract
    IdenticalReserveAssets = 5,
}
