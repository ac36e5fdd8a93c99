use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the feed owner
    Unauthorized = 1,

    /// Resolution is not after observation, or submission time went backwards
    InvalidTimestampOrdering = 2,

    /// No record at the requested index
    RecordNotFound = 3,

    /// Record counter overflowed
    ArithmeticOverflow = 4,
}
